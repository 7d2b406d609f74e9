use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnosis::{
    DiagnosisInput, DiagnosisOutcome, Energy, LearningAptitude, LifestyleFlags,
};

/// Identifier of the account owning a set of dogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DogId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Season in which the dog is most active outdoors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSeason {
    Summer,
    Winter,
}

/// Owner-editable fields of a dog profile, as submitted by the onboarding and edit forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogProfileDraft {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub weight_kg: f32,
    pub gender: Gender,
    #[serde(default)]
    pub neutered: bool,
    pub breed: String,
    #[serde(rename = "x")]
    pub learning: LearningAptitude,
    #[serde(rename = "y")]
    pub energy: Energy,
    #[serde(flatten)]
    pub lifestyle: LifestyleFlags,
    #[serde(default)]
    pub dog_food: Option<String>,
    #[serde(default)]
    pub walk_frequency: Option<String>,
    #[serde(default)]
    pub active_season: Option<ActiveSeason>,
    #[serde(default)]
    pub hospital_history: bool,
    #[serde(default)]
    pub allergy: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl DogProfileDraft {
    pub fn diagnosis_input(&self) -> DiagnosisInput {
        DiagnosisInput {
            breed: self.breed.clone(),
            birth_date: Some(self.birth_date),
            learning: self.learning,
            energy: self.energy,
            lifestyle: self.lifestyle,
        }
    }
}

/// Stored dog document: the raw answers plus the diagnosis computed at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogRecord {
    pub id: DogId,
    pub owner_id: OwnerId,
    pub profile: DogProfileDraft,
    pub diagnosis: DiagnosisOutcome,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Photo diary entry attached to a dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    pub dog_id: DogId,
    pub owner_id: OwnerId,
    pub photos: Vec<String>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryDraft {
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Energetic,
    Normal,
    SlightlyWorried,
    Unwell,
}

impl HealthCondition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Energetic => "Energetic",
            Self::Normal => "Normal",
            Self::SlightlyWorried => "A little worrying",
            Self::Unwell => "Unwell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appetite {
    AteWell,
    Normal,
    AteLittle,
}

impl Appetite {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AteWell => "Ate well",
            Self::Normal => "Normal",
            Self::AteLittle => "Barely ate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub dog_id: DogId,
    pub owner_id: OwnerId,
    pub record_date: NaiveDate,
    pub weight_kg: Option<f32>,
    pub condition: Option<HealthCondition>,
    pub appetite: Option<Appetite>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordDraft {
    pub record_date: NaiveDate,
    #[serde(default)]
    pub weight_kg: Option<f32>,
    #[serde(default)]
    pub condition: Option<HealthCondition>,
    #[serde(default)]
    pub appetite: Option<Appetite>,
    #[serde(default)]
    pub note: Option<String>,
}
