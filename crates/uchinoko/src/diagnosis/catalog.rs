use super::domain::SizeClass;

/// Breed entry owners pick when they do not know the breed.
pub const UNKNOWN_BREED: &str = "Unknown";

const SMALL_BREEDS: &[&str] = &[
    "Toy Poodle",
    "Chihuahua",
    "Pomeranian",
    "Maltese",
    "Shih Tzu",
    "Papillon",
    "Miniature Dachshund",
    "Miniature Schnauzer",
    "Yorkshire Terrier",
    "Pekingese",
    "Pug",
    "Boston Terrier",
    "Cavalier King Charles Spaniel",
    "Jack Russell Terrier",
    "Shetland Sheepdog (Miniature)",
    "Bichon Frise",
    "Maltipoo",
    "Pomapoo",
    "Chipoo",
    "Dapple",
    "Mixed (Small)",
];

const MEDIUM_BREEDS: &[&str] = &[
    "Shiba Inu",
    "Corgi",
    "French Bulldog",
    "Beagle",
    "Border Collie",
    "Sheltie",
    "Cocker Spaniel",
    "Basset Hound",
    "Welsh Terrier",
    "Standard Poodle",
    "Samoyed",
    "Husky (Miniature)",
    "American Cocker Spaniel",
    "Shiba",
    "Cairn Terrier",
    "West Highland White Terrier",
    "Mixed (Medium)",
];

const LARGE_BREEDS: &[&str] = &[
    "Golden Retriever",
    "Labrador Retriever",
    "Siberian Husky",
    "Akita",
    "Bernese Mountain Dog",
    "German Shepherd",
    "Doberman",
    "Great Dane",
    "Alaskan Malamute",
    "Rottweiler",
    "Boxer",
    "Weimaraner",
    "Bulldog",
    "Dalmatian",
    "Afghan Hound",
    "Greyhound",
    "Irish Setter",
    "Saint Bernard",
    "Newfoundland",
    "Mixed (Large)",
];

/// Immutable partition of recognized breed names into size classes.
#[derive(Debug, Clone)]
pub struct BreedCatalog {
    small: Vec<&'static str>,
    medium: Vec<&'static str>,
    large: Vec<&'static str>,
}

impl BreedCatalog {
    pub fn standard() -> Self {
        Self {
            small: SMALL_BREEDS.to_vec(),
            medium: MEDIUM_BREEDS.to_vec(),
            large: LARGE_BREEDS.to_vec(),
        }
    }

    /// Size class for a breed, falling back to `Small` for names outside the catalog.
    ///
    /// The `Small` fallback mirrors how free-text breeds have always been
    /// stored; it is kept for compatibility with existing records.
    pub fn classify_size(&self, breed: &str) -> SizeClass {
        if breed == UNKNOWN_BREED {
            return SizeClass::Medium;
        }
        self.size_of(breed).unwrap_or(SizeClass::Small)
    }

    /// Catalog membership only; `None` for the sentinel and unrecognized names.
    pub fn size_of(&self, breed: &str) -> Option<SizeClass> {
        SizeClass::ordered()
            .into_iter()
            .find(|size| self.breeds_in(*size).contains(&breed))
    }

    pub fn breeds_in(&self, size: SizeClass) -> &[&'static str] {
        match size {
            SizeClass::Small => &self.small,
            SizeClass::Medium => &self.medium,
            SizeClass::Large => &self.large,
        }
    }

    pub fn contains(&self, breed: &str) -> bool {
        breed == UNKNOWN_BREED || self.size_of(breed).is_some()
    }

    /// Selection list: the sentinel first, then small, medium and large breeds.
    pub fn all_breeds(&self) -> Vec<&'static str> {
        let total = 1 + self.small.len() + self.medium.len() + self.large.len();
        let mut breeds = Vec::with_capacity(total);
        breeds.push(UNKNOWN_BREED);
        breeds.extend(self.small.iter().copied());
        breeds.extend(self.medium.iter().copied());
        breeds.extend(self.large.iter().copied());
        breeds
    }
}

impl Default for BreedCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
