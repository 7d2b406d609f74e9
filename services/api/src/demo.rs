use crate::infra::{parse_date, InMemoryDogRepository};
use chrono::{NaiveDate, Utc};
use clap::Args;
use std::sync::Arc;
use uchinoko::diagnosis::{DiagnosisEngine, Energy, LeadType, LearningAptitude, LifestyleFlags};
use uchinoko::error::AppError;
use uchinoko::profiles::{
    Appetite, DiaryDraft, DogProfileDraft, DogProfileService, Gender, HealthCondition,
    HealthRecordDraft, OwnerId, ProfileLimits,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Owner account used for the sample dog
    #[arg(long, default_value = "demo-owner")]
    pub(crate) owner: String,
    /// Sample dog's birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, default_value = "2017-06-15")]
    pub(crate) birth_date: NaiveDate,
    /// Print the share card as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn sample_profile(birth_date: NaiveDate) -> DogProfileDraft {
    DogProfileDraft {
        name: "Kotetsu".to_string(),
        birth_date,
        weight_kg: 9.5,
        gender: Gender::Male,
        neutered: true,
        breed: "Shiba Inu".to_string(),
        learning: LearningAptitude::Good,
        energy: Energy::Normal,
        lifestyle: LifestyleFlags {
            multi_dog: false,
            toy_lover: true,
            sleeps_with_owner: true,
            restricted_room: false,
            lead_type: LeadType::Lead,
        },
        dog_food: Some("Acana".to_string()),
        walk_frequency: Some("Twice a day or more".to_string()),
        active_season: None,
        hospital_history: false,
        allergy: false,
        is_public: true,
        photo_url: None,
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        owner,
        birth_date,
        json,
    } = args;

    let now = Utc::now();
    let owner_id = OwnerId(owner);
    let service = DogProfileService::new(
        Arc::new(InMemoryDogRepository::default()),
        Arc::new(DiagnosisEngine::standard()),
        ProfileLimits::default(),
    );

    println!("Dog profile demo");
    let record = service.register(owner_id.clone(), sample_profile(birth_date), now)?;
    println!(
        "- Registered {} ({}) for owner {}",
        record.profile.name, record.id.0, owner_id.0
    );
    println!(
        "  Diagnosis: {} / {} / {} / rank {} (score {})",
        record.diagnosis.size_class.label(),
        record.diagnosis.age_group.label(),
        record.diagnosis.temperament.label(),
        record.diagnosis.difficulty_rank.label(),
        record.diagnosis.difficulty_score
    );

    let diary = service.add_diary(
        &owner_id,
        &record.id,
        DiaryDraft {
            photos: vec!["diary/kotetsu-park.jpg".to_string()],
            comment: "First walk in the new park.".to_string(),
        },
        now,
    )?;
    println!(
        "- Diary {} stored with {} photo(s)",
        diary.id,
        diary.photos.len()
    );

    let health = service.add_health_record(
        &owner_id,
        &record.id,
        HealthRecordDraft {
            record_date: now.date_naive(),
            weight_kg: Some(9.7),
            condition: Some(HealthCondition::Energetic),
            appetite: Some(Appetite::AteWell),
            note: None,
        },
        now,
    )?;
    let condition = health.condition.map(HealthCondition::label).unwrap_or("-");
    let appetite = health.appetite.map(Appetite::label).unwrap_or("-");
    println!(
        "- Health record {} on {}: {} / {}",
        health.id, health.record_date, condition, appetite
    );

    let card = service.share_card(&owner_id, &record.id)?;
    if json {
        match serde_json::to_string_pretty(&card) {
            Ok(payload) => println!("  Share card payload:\n{payload}"),
            Err(err) => println!("  Share card payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("\nShare card");
    println!("  {} ({})", card.name, card.breed);
    println!(
        "  {} / {} / {} / {:.1} kg",
        card.age_label, card.size_label, card.gender_label, card.weight_kg
    );
    println!("  Temperament: {}", card.temperament_label);
    for line in card.temperament_description.lines() {
        println!("    {line}");
    }
    if let Some(info) = &card.breed_info {
        println!("  Origin: {} | Purpose: {}", info.origin_country, info.purpose);
    }
    println!("  Training difficulty: rank {}", card.difficulty_rank.label());
    for paragraph in &card.difficulty_paragraphs {
        println!("    {paragraph}");
    }

    Ok(())
}
