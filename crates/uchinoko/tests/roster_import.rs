use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use uchinoko::diagnosis::{DiagnosisEngine, DifficultyRank, SizeClass, Temperament};
use uchinoko::roster::{RosterImportError, RosterImporter};

fn write_roster(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("uchinoko-{}-{name}.csv", std::process::id()));
    fs::write(&path, contents).expect("roster written");
    path
}

#[test]
fn shop_export_diagnoses_every_row() {
    let path = write_roster(
        "shop",
        "name,breed,birth_date,x,y,multi_dog,toy_lover,sleeps_with_owner,restricted_room,lead_type\n\
         Kotetsu,Shiba Inu,2017-06-15,1,0,no,yes,no,yes,lead\n\
         Hana, Golden Retriever ,2019-02-10,0,1,yes,yes,no,yes,\n\
         Pochi,Unknown,,-1,-1,,,,,harness\n",
    );

    let entries = RosterImporter::from_path(&path).expect("roster imports");
    fs::remove_file(&path).ok();

    let engine = DiagnosisEngine::standard();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid");
    let outcomes: Vec<_> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), engine.diagnose(&entry.input, today)))
        .collect();

    assert_eq!(outcomes.len(), 3);

    let (name, kotetsu) = &outcomes[0];
    assert_eq!(*name, "Kotetsu");
    assert_eq!(kotetsu.temperament, Temperament::Leader);
    assert_eq!(kotetsu.difficulty_rank, DifficultyRank::B);

    let (_, hana) = &outcomes[1];
    assert_eq!(hana.size_class, SizeClass::Large);
    assert_eq!(hana.temperament, Temperament::Citizen);
    assert_eq!(hana.difficulty_rank, DifficultyRank::A);

    let (_, pochi) = &outcomes[2];
    assert_eq!(pochi.size_class, SizeClass::Medium);
    assert_eq!(pochi.temperament, Temperament::Protected);
    assert_eq!(pochi.difficulty_score, 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("uchinoko-roster-that-does-not-exist.csv");

    let err = RosterImporter::from_path(path).expect_err("missing file");

    assert!(matches!(err, RosterImportError::Io(_)));
}
