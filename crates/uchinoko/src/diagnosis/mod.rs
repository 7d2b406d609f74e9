//! Temperament and training-difficulty diagnosis.
//!
//! Everything here is a pure mapping from owner answers to derived fields. The
//! engine owns only immutable tables, so a single instance can be shared across
//! request handlers and recomputed on every form change.

mod catalog;
mod describe;
pub mod domain;
pub mod options;
pub mod rules;

#[cfg(test)]
mod tests;

pub use catalog::{BreedCatalog, UNKNOWN_BREED};
pub use describe::{BreedInfo, DescriptionTables};
pub use domain::{
    AgeGroup, DiagnosisInput, DiagnosisOutcome, DifficultyRank, Energy, LeadType,
    LearningAptitude, LifestyleFlags, SizeClass, Temperament,
};
pub use options::SelectionOptions;

use chrono::NaiveDate;

/// Stateless diagnosis engine wrapping the breed catalog and text tables.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisEngine {
    catalog: BreedCatalog,
    descriptions: DescriptionTables,
}

impl DiagnosisEngine {
    pub fn new(catalog: BreedCatalog, descriptions: DescriptionTables) -> Self {
        Self {
            catalog,
            descriptions,
        }
    }

    pub fn standard() -> Self {
        Self::new(BreedCatalog::standard(), DescriptionTables::standard())
    }

    pub fn catalog(&self) -> &BreedCatalog {
        &self.catalog
    }

    pub fn descriptions(&self) -> &DescriptionTables {
        &self.descriptions
    }

    /// Computes every derived field for `input` as of `today`.
    ///
    /// A missing birth date yields [`AgeGroup::Adult`] so partially filled forms
    /// still preview a result.
    pub fn diagnose(&self, input: &DiagnosisInput, today: NaiveDate) -> DiagnosisOutcome {
        let size_class = self.catalog.classify_size(&input.breed);
        let age_group = input
            .birth_date
            .map(|birth_date| rules::classify_age(birth_date, size_class, today))
            .unwrap_or(AgeGroup::Adult);
        let temperament = rules::classify_temperament(input.learning, input.energy);
        let difficulty_score = rules::difficulty_score(&input.lifestyle);
        let difficulty_rank = rules::rank_for_score(difficulty_score);
        let difficulty_description = self.descriptions.compose_difficulty_description(
            difficulty_rank,
            age_group,
            size_class,
        );

        DiagnosisOutcome {
            size_class,
            age_group,
            temperament,
            difficulty_rank,
            difficulty_score,
            difficulty_description,
        }
    }

    pub fn classify_size(&self, breed: &str) -> SizeClass {
        self.catalog.classify_size(breed)
    }

    pub fn describe_breed(&self, breed: &str) -> BreedInfo {
        self.descriptions.describe_breed(breed)
    }

    pub fn describe_temperament(&self, temperament: Temperament) -> &'static str {
        self.descriptions.describe_temperament(temperament)
    }

    pub fn selection_options(&self) -> SelectionOptions {
        SelectionOptions::from_catalog(&self.catalog)
    }
}
