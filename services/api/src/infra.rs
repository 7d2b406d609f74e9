use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use uchinoko::profiles::{
    DiaryEntry, DogId, DogRecord, DogRepository, HealthRecord, OwnerId, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

type DogKey = (OwnerId, DogId);

/// Process-local stand-in for the hosted document store.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDogRepository {
    dogs: Arc<Mutex<HashMap<DogKey, DogRecord>>>,
    diaries: Arc<Mutex<HashMap<DogKey, Vec<DiaryEntry>>>>,
    health: Arc<Mutex<HashMap<DogKey, Vec<HealthRecord>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

impl DogRepository for InMemoryDogRepository {
    fn insert(&self, record: DogRecord) -> Result<DogRecord, RepositoryError> {
        let mut guard = lock(&self.dogs)?;
        let key = (record.owner_id.clone(), record.id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, record.clone());
        Ok(record)
    }

    fn update(&self, record: DogRecord) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.dogs)?;
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
        let guard = lock(&self.dogs)?;
        Ok(guard.get(&(owner_id.clone(), dog_id.clone())).cloned())
    }

    fn list_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<DogRecord>, RepositoryError> {
        let guard = lock(&self.dogs)?;
        let mut records: Vec<DogRecord> = guard
            .iter()
            .filter(|((owner, _), _)| owner == owner_id)
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    fn insert_diary(&self, entry: DiaryEntry) -> Result<DiaryEntry, RepositoryError> {
        let mut guard = lock(&self.diaries)?;
        guard
            .entry((entry.owner_id.clone(), entry.dog_id.clone()))
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    fn list_diaries(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<DiaryEntry>, RepositoryError> {
        let guard = lock(&self.diaries)?;
        let mut entries = guard
            .get(&(owner_id.clone(), dog_id.clone()))
            .cloned()
            .unwrap_or_default();
        entries.reverse();
        Ok(entries)
    }

    fn insert_health_record(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        let mut guard = lock(&self.health)?;
        guard
            .entry((record.owner_id.clone(), record.dog_id.clone()))
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn list_health_records(
        &self,
        owner_id: &OwnerId,
        dog_id: &DogId,
    ) -> Result<Vec<HealthRecord>, RepositoryError> {
        let guard = lock(&self.health)?;
        let mut records = guard
            .get(&(owner_id.clone(), dog_id.clone()))
            .cloned()
            .unwrap_or_default();
        // Stable sort keeps insertion order for same-day records; newest day first.
        records.reverse();
        records.sort_by(|a, b| b.record_date.cmp(&a.record_date));
        Ok(records)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_the_offending_value() {
        assert_eq!(
            parse_date(" 2017-06-15 "),
            Ok(NaiveDate::from_ymd_opt(2017, 6, 15).expect("valid"))
        );

        let err = parse_date("15/06/2017").expect_err("wrong format");
        assert!(err.contains("15/06/2017"));
    }
}
