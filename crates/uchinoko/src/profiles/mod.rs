//! Dog profiles, photo diaries, and health records.
//!
//! Profiles carry the owner's raw answers together with the diagnosis computed
//! immediately before each save. Storage is abstracted behind [`DogRepository`]
//! so the service can run against the document store or an in-memory double.

pub mod card;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use card::ShareCardView;
pub use domain::{
    ActiveSeason, Appetite, DiaryDraft, DiaryEntry, DogId, DogProfileDraft, DogRecord, Gender,
    HealthCondition, HealthRecord, HealthRecordDraft, OwnerId,
};
pub use repository::{DogRepository, RepositoryError};
pub use router::profile_router;
pub use service::{DogProfileService, ProfileServiceError};
pub use validation::{ProfileGuard, ProfileLimits, ProfileViolation};
