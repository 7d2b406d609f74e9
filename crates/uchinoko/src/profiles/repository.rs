use super::domain::{DiaryEntry, DogId, DogRecord, HealthRecord, OwnerId};

/// Document-store abstraction for dogs and their sub-collections.
///
/// Records are keyed by owner first, matching the `owners/{owner}/dogs/{dog}`
/// layout of the backing store.
pub trait DogRepository: Send + Sync {
    fn insert(&self, record: DogRecord) -> Result<DogRecord, RepositoryError>;
    fn update(&self, record: DogRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, owner_id: &OwnerId, dog_id: &DogId)
        -> Result<Option<DogRecord>, RepositoryError>;
    fn list_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<DogRecord>, RepositoryError>;
    fn insert_diary(&self, entry: DiaryEntry) -> Result<DiaryEntry, RepositoryError>;
    /// Newest entries first.
    fn list_diaries(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<DiaryEntry>, RepositoryError>;
    fn insert_health_record(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError>;
    /// Most recent `record_date` first.
    fn list_health_records(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<HealthRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
