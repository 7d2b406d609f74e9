use chrono::NaiveDate;

use super::domain::{DiaryDraft, DogProfileDraft, HealthRecordDraft};

const DEFAULT_MAX_DIARY_PHOTOS: usize = 3;

/// Validation errors raised before a profile, diary, or health record is stored.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProfileViolation {
    #[error("dog name is required")]
    MissingName,
    #[error("breed is required")]
    MissingBreed,
    #[error("birth date {birth_date} is after {today}")]
    BirthDateInFuture {
        birth_date: NaiveDate,
        today: NaiveDate,
    },
    #[error("weight must be a non-negative number of kilograms (found {0})")]
    InvalidWeight(f32),
    #[error("diary entries accept at most {max} photos (found {found})")]
    TooManyPhotos { max: usize, found: usize },
    #[error("diary entry needs a photo or a comment")]
    EmptyDiary,
}

/// Limits applied to owner uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLimits {
    pub max_diary_photos: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_diary_photos: DEFAULT_MAX_DIARY_PHOTOS,
        }
    }
}

/// Completeness checks the diagnosis engine leaves to its callers.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard {
    limits: ProfileLimits,
}

impl ProfileGuard {
    pub fn new(limits: ProfileLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ProfileLimits {
        self.limits
    }

    pub fn check_profile(
        &self,
        draft: &DogProfileDraft,
        today: NaiveDate,
    ) -> Result<(), ProfileViolation> {
        if draft.name.trim().is_empty() {
            return Err(ProfileViolation::MissingName);
        }
        if draft.breed.trim().is_empty() {
            return Err(ProfileViolation::MissingBreed);
        }
        if draft.birth_date > today {
            return Err(ProfileViolation::BirthDateInFuture {
                birth_date: draft.birth_date,
                today,
            });
        }
        check_weight(draft.weight_kg)
    }

    pub fn check_diary(&self, draft: &DiaryDraft) -> Result<(), ProfileViolation> {
        if draft.photos.len() > self.limits.max_diary_photos {
            return Err(ProfileViolation::TooManyPhotos {
                max: self.limits.max_diary_photos,
                found: draft.photos.len(),
            });
        }
        if draft.photos.is_empty() && draft.comment.trim().is_empty() {
            return Err(ProfileViolation::EmptyDiary);
        }
        Ok(())
    }

    pub fn check_health_record(&self, draft: &HealthRecordDraft) -> Result<(), ProfileViolation> {
        match draft.weight_kg {
            Some(weight) => check_weight(weight),
            None => Ok(()),
        }
    }
}

fn check_weight(weight: f32) -> Result<(), ProfileViolation> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(ProfileViolation::InvalidWeight(weight))
    }
}
