use chrono::NaiveDate;

use crate::diagnosis::domain::{
    DiagnosisInput, Energy, LeadType, LearningAptitude, LifestyleFlags,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Lifestyle answers that carry no difficulty points.
pub(super) fn calm_household() -> LifestyleFlags {
    LifestyleFlags {
        multi_dog: true,
        toy_lover: true,
        sleeps_with_owner: false,
        restricted_room: true,
        lead_type: LeadType::Lead,
    }
}

/// Lifestyle answers that score every difficulty point.
pub(super) fn demanding_household() -> LifestyleFlags {
    LifestyleFlags {
        multi_dog: false,
        toy_lover: false,
        sleeps_with_owner: true,
        restricted_room: false,
        lead_type: LeadType::Harness,
    }
}

pub(super) fn input(breed: &str, birth_date: Option<NaiveDate>) -> DiagnosisInput {
    DiagnosisInput {
        breed: breed.to_string(),
        birth_date,
        learning: LearningAptitude::Normal,
        energy: Energy::Normal,
        lifestyle: calm_household(),
    }
}
