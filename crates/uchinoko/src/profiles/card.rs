use serde::Serialize;

use super::domain::{DogId, DogRecord};
use crate::diagnosis::{BreedInfo, DiagnosisEngine, DifficultyRank, Temperament};

/// Display-ready summary of a stored dog for the shareable profile cards.
#[derive(Debug, Clone, Serialize)]
pub struct ShareCardView {
    pub dog_id: DogId,
    pub name: String,
    pub breed: String,
    pub age_label: &'static str,
    pub size_label: &'static str,
    pub gender_label: String,
    pub weight_kg: f32,
    pub temperament: Temperament,
    pub temperament_label: &'static str,
    pub temperament_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_info: Option<BreedInfo>,
    pub difficulty_rank: DifficultyRank,
    pub difficulty_paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl ShareCardView {
    pub fn from_record(record: &DogRecord, engine: &DiagnosisEngine) -> Self {
        let profile = &record.profile;
        let diagnosis = &record.diagnosis;

        let gender_label = if profile.neutered {
            format!("{} (neutered)", profile.gender.label())
        } else {
            profile.gender.label().to_string()
        };

        let breed_info = Some(engine.describe_breed(&profile.breed)).filter(|info| !info.is_empty());

        let mut difficulty_paragraphs: Vec<String> = diagnosis
            .difficulty_description
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_string)
            .collect();
        if difficulty_paragraphs.is_empty() {
            difficulty_paragraphs.push(engine.descriptions().compose_difficulty_description(
                diagnosis.difficulty_rank,
                diagnosis.age_group,
                diagnosis.size_class,
            ));
        }

        Self {
            dog_id: record.id.clone(),
            name: profile.name.clone(),
            breed: profile.breed.clone(),
            age_label: diagnosis.age_group.label(),
            size_label: diagnosis.size_class.label(),
            gender_label,
            weight_kg: profile.weight_kg,
            temperament: diagnosis.temperament,
            temperament_label: diagnosis.temperament.label(),
            temperament_description: engine.describe_temperament(diagnosis.temperament),
            breed_info,
            difficulty_rank: diagnosis.difficulty_rank,
            difficulty_paragraphs,
            photo_url: profile.photo_url.clone(),
        }
    }
}
