use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::{AgeGroup, DifficultyRank, SizeClass, Temperament};

/// Background notes for a breed shown on the dog detail and share pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedInfo {
    pub origin_country: String,
    pub purpose: String,
    pub strengths: String,
    pub weaknesses: String,
    pub care_tip: String,
}

impl BreedInfo {
    /// True when the breed has no entry in the description table.
    pub fn is_empty(&self) -> bool {
        self.origin_country.is_empty()
            && self.purpose.is_empty()
            && self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.care_tip.is_empty()
    }
}

struct BreedNotes {
    breed: &'static str,
    origin_country: &'static str,
    purpose: &'static str,
    strengths: &'static str,
    weaknesses: &'static str,
    care_tip: &'static str,
}

// Most breeds have no entry yet.
const BREED_NOTES: &[BreedNotes] = &[BreedNotes {
    breed: "Shiba Inu",
    origin_country: "Japan",
    purpose: "Hunting / Watchdog",
    strengths: "Loyal / Brave",
    weaknesses: "Independent / Heavy shedding",
    care_tip: "Japan's signature breed. Brush thoroughly during shedding season.",
}];

/// Long-form archetype text for the detail and share pages.
const fn temperament_paragraph(temperament: Temperament) -> &'static str {
    match temperament {
        Temperament::Leader => {
            "A wise and brave organizer.\nUnderstands its role in both dog and human society and wants to be useful to people.\nGive it jobs so it can enjoy a sense of accomplishment."
        }
        Temperament::RightHand => {
            "Active, optimistic and curious.\nMay make conspicuous mistakes, but its abilities grow under a leader-type dog or person.\nProvide plenty of exercise and stimulation."
        }
        Temperament::Citizen => {
            "Spends its time confirming rank with others through play.\nPlay can heat up into squabbles, but it is sociable and relatively easy to keep.\nFind it suitable playmates."
        }
        Temperament::Protected => {
            "Attaches easily to particular people and is shy with everyone else.\nAlways wants to be held.\nChanges in environment are hard for it, so work on socialization deliberately."
        }
    }
}

/// One-line archetype text shown next to the live form preview.
const fn temperament_line(temperament: Temperament) -> &'static str {
    match temperament {
        Temperament::Leader => {
            "A wise and brave organizer. Give it jobs so it feels a sense of achievement."
        }
        Temperament::RightHand => {
            "Active and optimistic. Provide plenty of exercise and stimulation."
        }
        Temperament::Citizen => "Confirms rank through play. A suitable playmate matters.",
        Temperament::Protected => {
            "Good at seeking affection from particular people. Train with socialization in mind."
        }
    }
}

const fn rank_paragraph(rank: DifficultyRank) -> &'static str {
    match rank {
        DifficultyRank::A => {
            "Lack of exercise or tasks can lead to problem behavior. Build meaningful time together through training."
        }
        DifficultyRank::B => {
            "Active, so lack of exercise can lead to problem behavior. Quick to learn and easy to improve."
        }
        DifficultyRank::C => {
            "Tends to bark more as socialization declines. Train step by step under professional guidance."
        }
    }
}

/// Static text tables consulted by the engine. Built once and shared.
#[derive(Debug, Clone)]
pub struct DescriptionTables {
    breeds: HashMap<&'static str, BreedInfo>,
}

impl DescriptionTables {
    pub fn standard() -> Self {
        let breeds = BREED_NOTES
            .iter()
            .map(|notes| {
                (
                    notes.breed,
                    BreedInfo {
                        origin_country: notes.origin_country.to_string(),
                        purpose: notes.purpose.to_string(),
                        strengths: notes.strengths.to_string(),
                        weaknesses: notes.weaknesses.to_string(),
                        care_tip: notes.care_tip.to_string(),
                    },
                )
            })
            .collect();

        Self { breeds }
    }

    /// Breed notes, or an empty [`BreedInfo`] when the table has no entry.
    pub fn describe_breed(&self, breed: &str) -> BreedInfo {
        self.breeds.get(breed).cloned().unwrap_or_default()
    }

    pub fn describe_temperament(&self, temperament: Temperament) -> &'static str {
        temperament_paragraph(temperament)
    }

    pub fn temperament_summary(&self, temperament: Temperament) -> &'static str {
        temperament_line(temperament)
    }

    pub fn compose_difficulty_description(
        &self,
        rank: DifficultyRank,
        age_group: AgeGroup,
        size: SizeClass,
    ) -> String {
        compose(Some(rank), age_group, size)
    }

    /// Re-renders the description from stored codes. Unknown codes fall back to
    /// an adult, medium-sized dog and an unknown rank drops the paragraph.
    pub fn compose_stored_difficulty_description(
        &self,
        rank: &str,
        age_code: i64,
        size_code: i64,
    ) -> String {
        let age_group = AgeGroup::from_code(age_code).unwrap_or(AgeGroup::Adult);
        let size = SizeClass::from_code(size_code).unwrap_or(SizeClass::Medium);
        compose(DifficultyRank::parse(rank), age_group, size)
    }
}

impl Default for DescriptionTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn compose(rank: Option<DifficultyRank>, age_group: AgeGroup, size: SizeClass) -> String {
    let headline = format!("{} {}.", age_group.label(), size.label());
    match rank {
        Some(rank) => format!("{headline} {}", rank_paragraph(rank)),
        None => headline,
    }
}
