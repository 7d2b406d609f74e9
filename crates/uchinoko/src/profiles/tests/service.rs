use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use super::common::*;
use crate::diagnosis::{
    AgeGroup, DiagnosisEngine, DifficultyRank, Energy, LearningAptitude, SizeClass, Temperament,
};
use crate::profiles::domain::{
    Appetite, DiaryDraft, DogId, HealthCondition, HealthRecordDraft, OwnerId,
};
use crate::profiles::repository::{DogRepository, RepositoryError};
use crate::profiles::validation::{ProfileLimits, ProfileViolation};
use crate::profiles::{DogProfileService, ProfileServiceError};

#[test]
fn register_stores_recomputed_diagnosis() {
    let (service, repository) = build_service();

    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    assert!(record.id.0.starts_with("dog-"));
    assert_eq!(record.diagnosis.size_class, SizeClass::Medium);
    assert_eq!(record.diagnosis.age_group, AgeGroup::Senior);
    assert_eq!(record.diagnosis.temperament, Temperament::Leader);
    assert_eq!(record.diagnosis.difficulty_rank, DifficultyRank::B);
    assert_eq!(record.created_at, now());

    let stored = repository
        .fetch(&owner(), &record.id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn preview_matches_what_register_persists() {
    let (service, _) = build_service();

    let preview = service.preview(&draft(), now().date_naive());
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    assert_eq!(preview, record.diagnosis);
}

#[test]
fn update_reruns_diagnosis_on_changed_answers() {
    let (service, _) = build_service();
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    let mut edited = draft();
    edited.breed = "Chihuahua".to_string();
    edited.learning = LearningAptitude::Normal;
    edited.energy = Energy::Timid;
    edited.lifestyle.sleeps_with_owner = true;
    edited.lifestyle.restricted_room = false;

    let later = now() + Duration::days(1);
    let updated = service
        .update(&owner(), &record.id, edited, later)
        .expect("update succeeds");

    assert_eq!(updated.diagnosis.size_class, SizeClass::Small);
    assert_eq!(updated.diagnosis.age_group, AgeGroup::Adult);
    assert_eq!(updated.diagnosis.temperament, Temperament::Protected);
    assert_eq!(updated.diagnosis.difficulty_rank, DifficultyRank::C);
    assert_eq!(updated.created_at, record.created_at);
    assert_eq!(updated.updated_at, later);
}

#[test]
fn update_of_unknown_dog_is_not_found() {
    let (service, _) = build_service();

    let result = service.update(&owner(), &DogId("dog-missing".to_string()), draft(), now());

    assert!(matches!(
        result,
        Err(ProfileServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn invalid_profile_is_never_persisted() {
    let (service, repository) = build_service();
    let mut unnamed = draft();
    unnamed.name.clear();

    let result = service.register(owner(), unnamed, now());

    assert!(matches!(
        result,
        Err(ProfileServiceError::Validation(ProfileViolation::MissingName))
    ));
    assert!(repository
        .list_for_owner(&owner())
        .expect("list succeeds")
        .is_empty());
}

#[test]
fn dogs_are_scoped_to_their_owner() {
    let (service, _) = build_service();
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");
    let stranger = OwnerId("owner-2".to_string());

    assert!(service.list(&stranger).expect("list succeeds").is_empty());
    assert!(matches!(
        service.get(&stranger, &record.id),
        Err(ProfileServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn diaries_require_existing_dog_and_respect_photo_limit() {
    let (service, _) = build_service();
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    let entry = service
        .add_diary(
            &owner(),
            &record.id,
            DiaryDraft {
                photos: vec!["walk.jpg".to_string()],
                comment: "First snow".to_string(),
            },
            now(),
        )
        .expect("diary stored");
    assert!(entry.id.starts_with("diary-"));

    let too_many = DiaryDraft {
        photos: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        comment: String::new(),
    };
    assert!(matches!(
        service.add_diary(&owner(), &record.id, too_many, now()),
        Err(ProfileServiceError::Validation(ProfileViolation::TooManyPhotos { .. }))
    ));

    let orphan = DiaryDraft {
        photos: Vec::new(),
        comment: "Nobody home".to_string(),
    };
    assert!(matches!(
        service.add_diary(&owner(), &DogId("dog-missing".to_string()), orphan, now()),
        Err(ProfileServiceError::Repository(RepositoryError::NotFound))
    ));

    let diaries = service.diaries(&owner(), &record.id).expect("list succeeds");
    assert_eq!(diaries, vec![entry]);
}

#[test]
fn health_records_list_newest_first() {
    let (service, _) = build_service();
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    for day in [3, 10, 7] {
        service
            .add_health_record(
                &owner(),
                &record.id,
                HealthRecordDraft {
                    record_date: NaiveDate::from_ymd_opt(2025, 6, day).expect("valid"),
                    weight_kg: Some(9.4),
                    condition: Some(HealthCondition::Energetic),
                    appetite: Some(Appetite::AteWell),
                    note: None,
                },
                now(),
            )
            .expect("health record stored");
    }

    let records = service
        .health_records(&owner(), &record.id)
        .expect("list succeeds");
    let days: Vec<u32> = records
        .iter()
        .map(|record| chrono::Datelike::day(&record.record_date))
        .collect();
    assert_eq!(days, vec![10, 7, 3]);
}

#[test]
fn share_card_carries_labels_and_descriptions() {
    let (service, _) = build_service();
    let record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");

    let card = service
        .share_card(&owner(), &record.id)
        .expect("card builds");

    assert_eq!(card.age_label, "Senior stage");
    assert_eq!(card.size_label, "Medium dog");
    assert_eq!(card.gender_label, "Male (neutered)");
    assert_eq!(card.temperament_label, "Leader type");
    assert!(card.temperament_description.contains("organizer"));
    let breed_info = card.breed_info.expect("shiba has breed notes");
    assert_eq!(breed_info.origin_country, "Japan");
    assert_eq!(card.difficulty_paragraphs.len(), 1);
    assert_eq!(
        card.difficulty_paragraphs[0],
        record.diagnosis.difficulty_description
    );
}

#[test]
fn share_card_recomposes_missing_difficulty_text() {
    let (service, repository) = build_service();
    let mut record = service
        .register(owner(), draft(), now())
        .expect("registration succeeds");
    record.diagnosis.difficulty_description.clear();
    record.profile.breed = "Maltipoo".to_string();
    repository.update(record.clone()).expect("update succeeds");

    let card = service
        .share_card(&owner(), &record.id)
        .expect("card builds");

    assert!(card.breed_info.is_none());
    assert_eq!(card.difficulty_paragraphs.len(), 1);
    assert!(card.difficulty_paragraphs[0].starts_with("Senior stage Medium dog."));
}

#[test]
fn repository_outage_surfaces_as_error() {
    let service = DogProfileService::new(
        Arc::new(UnavailableRepository),
        Arc::new(DiagnosisEngine::standard()),
        ProfileLimits::default(),
    );

    assert!(matches!(
        service.register(owner(), draft(), now()),
        Err(ProfileServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}
