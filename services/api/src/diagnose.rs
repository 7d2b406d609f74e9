use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use uchinoko::diagnosis::{
    DiagnosisEngine, DiagnosisInput, DiagnosisOutcome, DifficultyRank, Energy, LeadType,
    LearningAptitude, LifestyleFlags, SizeClass, UNKNOWN_BREED,
};
use uchinoko::error::AppError;
use uchinoko::roster::RosterImporter;

#[derive(Args, Debug)]
pub(crate) struct DogArgs {
    /// Breed name as listed by `breeds`; unrecognized names are treated as small dogs
    #[arg(long, default_value = UNKNOWN_BREED)]
    pub(crate) breed: String,
    /// Birth date (YYYY-MM-DD); omit to assume an adult
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: Option<NaiveDate>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Learning aptitude: negative = slow, 0 = average, positive = quick
    #[arg(long, visible_alias = "x", default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) learning: i64,
    /// Energy: negative = timid, 0 = average, positive = high
    #[arg(long, visible_alias = "y", default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) energy: i64,
    /// Lives with other dogs
    #[arg(long)]
    pub(crate) multi_dog: bool,
    /// Plays with toys
    #[arg(long)]
    pub(crate) toy_lover: bool,
    /// Sleeps in the owner's bed
    #[arg(long)]
    pub(crate) sleeps_with_owner: bool,
    /// Kept out of some rooms
    #[arg(long)]
    pub(crate) restricted_room: bool,
    /// Walking gear: `lead` or `harness`
    #[arg(long, default_value = "lead")]
    pub(crate) lead_type: String,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl DogArgs {
    fn input(&self) -> DiagnosisInput {
        DiagnosisInput {
            breed: self.breed.clone(),
            birth_date: self.birth_date,
            learning: LearningAptitude::from(self.learning),
            energy: Energy::from(self.energy),
            lifestyle: LifestyleFlags {
                multi_dog: self.multi_dog,
                toy_lover: self.toy_lover,
                sleeps_with_owner: self.sleeps_with_owner,
                restricted_room: self.restricted_room,
                lead_type: LeadType::parse(&self.lead_type),
            },
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV with name, breed, birth_date, x, y and lifestyle columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BreedsArgs {
    /// Only list breeds of this size (small, medium or large)
    #[arg(long, value_parser = parse_size)]
    pub(crate) size: Option<SizeClass>,
}

fn parse_size(raw: &str) -> Result<SizeClass, String> {
    SizeClass::ordered()
        .into_iter()
        .find(|size| {
            let name = size.label().trim_end_matches(" dog");
            name.eq_ignore_ascii_case(raw.trim())
        })
        .ok_or_else(|| format!("unknown size '{raw}', expected small, medium or large"))
}

pub(crate) fn run_diagnose_dog(args: DogArgs) -> Result<(), AppError> {
    let engine = DiagnosisEngine::standard();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let input = args.input();
    let outcome = engine.diagnose(&input, today);

    if args.json {
        let payload = serde_json::json!({
            "today": today,
            "breed": input.breed,
            "outcome": outcome,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Diagnosis payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_dog(&engine, &input, &outcome, today);
    Ok(())
}

fn render_dog(
    engine: &DiagnosisEngine,
    input: &DiagnosisInput,
    outcome: &DiagnosisOutcome,
    today: NaiveDate,
) {
    println!("Diagnosis for {} (as of {})", input.breed, today);
    if !engine.catalog().contains(&input.breed) {
        println!("  note: breed not in catalog, treated as a small dog");
    }
    println!("- Size: {}", outcome.size_class.label());
    println!("- Life stage: {}", outcome.age_group.label());
    println!(
        "- Temperament: {} ({})",
        outcome.temperament.label(),
        engine.descriptions().temperament_summary(outcome.temperament)
    );
    println!(
        "- Training difficulty: rank {} (score {}/5)",
        outcome.difficulty_rank.label(),
        outcome.difficulty_score
    );

    println!("\n{}", outcome.difficulty_description);
    println!("\n{}", engine.describe_temperament(outcome.temperament));

    let info = engine.describe_breed(&input.breed);
    if !info.is_empty() {
        println!("\nBreed notes");
        println!("  Origin: {}", info.origin_country);
        println!("  Purpose: {}", info.purpose);
        println!("  Strengths: {}", info.strengths);
        println!("  Weaknesses: {}", info.weaknesses);
        println!("  Care tip: {}", info.care_tip);
    }
}

pub(crate) fn run_diagnose_roster(args: RosterArgs) -> Result<(), AppError> {
    let engine = DiagnosisEngine::standard();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let entries = RosterImporter::from_path(&args.csv)?;

    println!(
        "Roster diagnosis for {} ({} dogs, as of {})",
        args.csv.display(),
        entries.len(),
        today
    );

    let mut by_rank: BTreeMap<DifficultyRank, usize> = BTreeMap::new();
    for entry in &entries {
        let outcome = engine.diagnose(&entry.input, today);
        *by_rank.entry(outcome.difficulty_rank).or_default() += 1;
        println!(
            "- {:<14} {:<22} {:<11} {:<13} {:<16} rank {}",
            entry.name,
            entry.input.breed,
            outcome.size_class.label(),
            outcome.age_group.label(),
            outcome.temperament.label(),
            outcome.difficulty_rank.label()
        );
    }

    if !by_rank.is_empty() {
        println!("Rank distribution:");
        for (rank, count) in by_rank {
            println!("  - {}: {}", rank.label(), count);
        }
    }

    Ok(())
}

pub(crate) fn run_breeds(args: BreedsArgs) -> Result<(), AppError> {
    let engine = DiagnosisEngine::standard();
    let catalog = engine.catalog();

    let sizes: Vec<SizeClass> = match args.size {
        Some(size) => vec![size],
        None => SizeClass::ordered().to_vec(),
    };

    for size in sizes {
        let breeds = catalog.breeds_in(size);
        println!("{} ({} breeds)", size.label(), breeds.len());
        for breed in breeds {
            println!("  - {breed}");
        }
    }

    if args.size.is_none() {
        println!("\n'{UNKNOWN_BREED}' is accepted and diagnosed as a medium dog.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_args_map_onto_diagnosis_input() {
        let args = DogArgs {
            breed: "Akita".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            today: None,
            learning: -3,
            energy: 2,
            multi_dog: true,
            toy_lover: false,
            sleeps_with_owner: false,
            restricted_room: true,
            lead_type: "Harness".to_string(),
            json: false,
        };

        let input = args.input();

        assert_eq!(input.learning, LearningAptitude::Poor);
        assert_eq!(input.energy, Energy::High);
        assert_eq!(input.lifestyle.lead_type, LeadType::Harness);
        assert!(input.lifestyle.multi_dog);
        assert!(input.lifestyle.restricted_room);
    }

    #[test]
    fn size_argument_is_case_insensitive() {
        assert_eq!(parse_size("Large"), Ok(SizeClass::Large));
        assert_eq!(parse_size(" small "), Ok(SizeClass::Small));
        assert!(parse_size("giant").is_err());
    }
}
