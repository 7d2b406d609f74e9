use chrono::{Datelike, NaiveDate};

use super::domain::{
    AgeGroup, DifficultyRank, Energy, LeadType, LearningAptitude, LifestyleFlags, SizeClass,
    Temperament,
};

/// Whole years between `birth_date` and `today`, counting a year only once the
/// birthday has been reached. Negative when the birth date lies in the future.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    let birthday_reached = (today.month(), today.day()) >= (birth_date.month(), birth_date.day());
    if birthday_reached {
        years
    } else {
        years - 1
    }
}

/// Age (in years) from which a dog of the given size counts as a senior.
pub const fn senior_threshold(size: SizeClass) -> i32 {
    match size {
        SizeClass::Small => 10,
        SizeClass::Medium => 7,
        SizeClass::Large => 5,
    }
}

pub fn classify_age(birth_date: NaiveDate, size: SizeClass, today: NaiveDate) -> AgeGroup {
    let age = age_in_years(birth_date, today);
    if age < 1 {
        AgeGroup::Puppy
    } else if age < senior_threshold(size) {
        AgeGroup::Adult
    } else {
        AgeGroup::Senior
    }
}

/// Energy is checked first: a high-energy dog is a citizen whatever its aptitude.
pub fn classify_temperament(learning: LearningAptitude, energy: Energy) -> Temperament {
    match (energy, learning) {
        (Energy::High, _) => Temperament::Citizen,
        (Energy::Normal, LearningAptitude::Good) => Temperament::Leader,
        (Energy::Normal, LearningAptitude::Normal) => Temperament::RightHand,
        (Energy::Normal, LearningAptitude::Poor) => Temperament::Citizen,
        (Energy::Timid, LearningAptitude::Good) => Temperament::Citizen,
        (Energy::Timid, LearningAptitude::Normal | LearningAptitude::Poor) => {
            Temperament::Protected
        }
    }
}

/// Counts the lifestyle answers that make training harder (0..=5).
pub fn difficulty_score(flags: &LifestyleFlags) -> u8 {
    [
        !flags.multi_dog,
        !flags.toy_lover,
        flags.sleeps_with_owner,
        !flags.restricted_room,
        flags.lead_type == LeadType::Harness,
    ]
    .into_iter()
    .filter(|risk| *risk)
    .count() as u8
}

pub const fn rank_for_score(score: u8) -> DifficultyRank {
    match score {
        0 => DifficultyRank::A,
        1 | 2 => DifficultyRank::B,
        _ => DifficultyRank::C,
    }
}

/// Each risk answer nudges the dog toward a harder profile; owners only see
/// the bucket, never the point total.
pub fn classify_difficulty(flags: &LifestyleFlags) -> DifficultyRank {
    rank_for_score(difficulty_score(flags))
}
