use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use super::card::ShareCardView;
use super::domain::{
    DiaryDraft, DiaryEntry, DogId, DogProfileDraft, DogRecord, HealthRecord, HealthRecordDraft,
    OwnerId,
};
use super::repository::{DogRepository, RepositoryError};
use super::validation::{ProfileGuard, ProfileLimits, ProfileViolation};
use crate::diagnosis::{DiagnosisEngine, DiagnosisOutcome};

/// Service composing validation, the diagnosis engine, and the dog repository.
pub struct DogProfileService<R> {
    guard: ProfileGuard,
    engine: Arc<DiagnosisEngine>,
    repository: Arc<R>,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

impl<R> DogProfileService<R>
where
    R: DogRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<DiagnosisEngine>, limits: ProfileLimits) -> Self {
        Self {
            guard: ProfileGuard::new(limits),
            engine,
            repository,
        }
    }

    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    /// Live diagnosis for a form that has not been saved yet.
    pub fn preview(&self, draft: &DogProfileDraft, today: NaiveDate) -> DiagnosisOutcome {
        self.engine.diagnose(&draft.diagnosis_input(), today)
    }

    /// Validate and store a new dog, diagnosing it as of `now`.
    pub fn register(
        &self,
        owner_id: OwnerId,
        draft: DogProfileDraft,
        now: DateTime<Utc>,
    ) -> Result<DogRecord, ProfileServiceError> {
        let today = now.date_naive();
        self.validate_profile(&draft, today)?;

        let diagnosis = self.preview(&draft, today);
        let record = DogRecord {
            id: DogId(next_id("dog")),
            owner_id,
            profile: draft,
            diagnosis,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            owner = %stored.owner_id.0,
            dog = %stored.id.0,
            temperament = stored.diagnosis.temperament.label(),
            rank = stored.diagnosis.difficulty_rank.label(),
            "registered dog profile"
        );
        Ok(stored)
    }

    /// Replace the editable fields of a stored dog and re-run the diagnosis.
    pub fn update(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
        draft: DogProfileDraft,
        now: DateTime<Utc>,
    ) -> Result<DogRecord, ProfileServiceError> {
        let today = now.date_naive();
        self.validate_profile(&draft, today)?;

        let mut record = self.get(owner_id, dog_id)?;
        record.diagnosis = self.preview(&draft, today);
        record.profile = draft;
        record.updated_at = now;

        self.repository.update(record.clone())?;
        info!(
            owner = %owner_id.0,
            dog = %dog_id.0,
            rank = record.diagnosis.difficulty_rank.label(),
            "updated dog profile"
        );
        Ok(record)
    }

    pub fn get(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<DogRecord, ProfileServiceError> {
        let record = self
            .repository
            .fetch(owner_id, dog_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self, owner_id: &OwnerId) -> Result<Vec<DogRecord>, ProfileServiceError> {
        Ok(self.repository.list_for_owner(owner_id)?)
    }

    pub fn add_diary(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
        draft: DiaryDraft,
        now: DateTime<Utc>,
    ) -> Result<DiaryEntry, ProfileServiceError> {
        if let Err(violation) = self.guard.check_diary(&draft) {
            warn!(owner = %owner_id.0, dog = %dog_id.0, %violation, "rejected diary entry");
            return Err(violation.into());
        }
        self.get(owner_id, dog_id)?;

        let entry = DiaryEntry {
            id: next_id("diary"),
            dog_id: dog_id.clone(),
            owner_id: owner_id.clone(),
            photos: draft.photos,
            comment: draft.comment,
            created_at: now,
        };
        let stored = self.repository.insert_diary(entry)?;
        debug!(dog = %dog_id.0, photos = stored.photos.len(), "stored diary entry");
        Ok(stored)
    }

    pub fn diaries(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<DiaryEntry>, ProfileServiceError> {
        Ok(self.repository.list_diaries(owner_id, dog_id)?)
    }

    pub fn add_health_record(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
        draft: HealthRecordDraft,
        now: DateTime<Utc>,
    ) -> Result<HealthRecord, ProfileServiceError> {
        if let Err(violation) = self.guard.check_health_record(&draft) {
            warn!(owner = %owner_id.0, dog = %dog_id.0, %violation, "rejected health record");
            return Err(violation.into());
        }
        self.get(owner_id, dog_id)?;

        let record = HealthRecord {
            id: next_id("health"),
            dog_id: dog_id.clone(),
            owner_id: owner_id.clone(),
            record_date: draft.record_date,
            weight_kg: draft.weight_kg,
            condition: draft.condition,
            appetite: draft.appetite,
            note: draft.note,
            created_at: now,
        };
        let stored = self.repository.insert_health_record(record)?;
        debug!(dog = %dog_id.0, date = %stored.record_date, "stored health record");
        Ok(stored)
    }

    pub fn health_records(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<HealthRecord>, ProfileServiceError> {
        Ok(self.repository.list_health_records(owner_id, dog_id)?)
    }

    pub fn share_card(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<ShareCardView, ProfileServiceError> {
        let record = self.get(owner_id, dog_id)?;
        Ok(ShareCardView::from_record(&record, &self.engine))
    }

    fn validate_profile(
        &self,
        draft: &DogProfileDraft,
        today: NaiveDate,
    ) -> Result<(), ProfileViolation> {
        self.guard.check_profile(draft, today).inspect_err(|violation| {
            warn!(dog = %draft.name, %violation, "rejected dog profile");
        })
    }
}

/// Error raised by the dog profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
