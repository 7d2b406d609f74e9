use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::diagnosis::{DiagnosisEngine, Energy, LeadType, LearningAptitude, LifestyleFlags};
use crate::profiles::domain::{
    DiaryEntry, DogId, DogProfileDraft, DogRecord, Gender, HealthRecord, OwnerId,
};
use crate::profiles::repository::{DogRepository, RepositoryError};
use crate::profiles::validation::ProfileLimits;
use crate::profiles::DogProfileService;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn owner() -> OwnerId {
    OwnerId("owner-1".to_string())
}

pub(super) fn draft() -> DogProfileDraft {
    DogProfileDraft {
        name: "Kotetsu".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2017, 6, 15).expect("valid"),
        weight_kg: 9.5,
        gender: Gender::Male,
        neutered: true,
        breed: "Shiba Inu".to_string(),
        learning: LearningAptitude::Good,
        energy: Energy::Normal,
        lifestyle: LifestyleFlags {
            multi_dog: false,
            toy_lover: true,
            sleeps_with_owner: false,
            restricted_room: true,
            lead_type: LeadType::Lead,
        },
        dog_food: Some("Acana".to_string()),
        walk_frequency: Some("Twice a day or more".to_string()),
        active_season: None,
        hospital_history: false,
        allergy: false,
        is_public: false,
        photo_url: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    dogs: Arc<Mutex<HashMap<(OwnerId, DogId), DogRecord>>>,
    diaries: Arc<Mutex<Vec<DiaryEntry>>>,
    health: Arc<Mutex<Vec<HealthRecord>>>,
}

impl DogRepository for MemoryRepository {
    fn insert(&self, record: DogRecord) -> Result<DogRecord, RepositoryError> {
        let mut guard = self.dogs.lock().expect("lock");
        let key = (record.owner_id.clone(), record.id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, record.clone());
        Ok(record)
    }

    fn update(&self, record: DogRecord) -> Result<(), RepositoryError> {
        let mut guard = self.dogs.lock().expect("lock");
        let key = (record.owner_id.clone(), record.id.clone());
        match guard.get_mut(&key) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Option<DogRecord>, RepositoryError> {
        let guard = self.dogs.lock().expect("lock");
        Ok(guard.get(&(owner_id.clone(), dog_id.clone())).cloned())
    }

    fn list_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<DogRecord>, RepositoryError> {
        let guard = self.dogs.lock().expect("lock");
        let mut records: Vec<DogRecord> = guard
            .values()
            .filter(|record| &record.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    fn insert_diary(&self, entry: DiaryEntry) -> Result<DiaryEntry, RepositoryError> {
        self.diaries.lock().expect("lock").push(entry.clone());
        Ok(entry)
    }

    fn list_diaries(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<DiaryEntry>, RepositoryError> {
        let guard = self.diaries.lock().expect("lock");
        Ok(guard
            .iter()
            .rev()
            .filter(|entry| &entry.owner_id == owner_id && &entry.dog_id == dog_id)
            .cloned()
            .collect())
    }

    fn insert_health_record(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        self.health.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    fn list_health_records(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<HealthRecord>, RepositoryError> {
        let guard = self.health.lock().expect("lock");
        let mut records: Vec<HealthRecord> = guard
            .iter()
            .filter(|record| &record.owner_id == owner_id && &record.dog_id == dog_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.record_date.cmp(&a.record_date));
        Ok(records)
    }
}

/// Repository whose backing store is always down.
pub(super) struct UnavailableRepository;

impl DogRepository for UnavailableRepository {
    fn insert(&self, _record: DogRecord) -> Result<DogRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: DogRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(
        &self,
        _owner_id: &OwnerId,
        _dog_id: &DogId,
    ) -> Result<Option<DogRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list_for_owner(&self, _owner_id: &OwnerId) -> Result<Vec<DogRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn insert_diary(&self, _entry: DiaryEntry) -> Result<DiaryEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list_diaries(
        &self,
        _owner_id: &OwnerId,
        _dog_id: &DogId,
    ) -> Result<Vec<DiaryEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn insert_health_record(&self, _record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list_health_records(
        &self,
        _owner_id: &OwnerId,
        _dog_id: &DogId,
    ) -> Result<Vec<HealthRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (DogProfileService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = DogProfileService::new(
        Arc::new(repository.clone()),
        Arc::new(DiagnosisEngine::standard()),
        ProfileLimits::default(),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
