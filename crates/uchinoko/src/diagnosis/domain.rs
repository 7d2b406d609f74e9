use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Breed size bucket used to pick the senior-age threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    /// Numeric code stored alongside dog records (0 = small, 1 = medium, 2 = large).
    pub const fn code(self) -> u8 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small dog",
            Self::Medium => "Medium dog",
            Self::Large => "Large dog",
        }
    }
}

/// Life stage derived from calendar age and breed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Puppy,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Puppy, Self::Adult, Self::Senior]
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Puppy => 0,
            Self::Adult => 1,
            Self::Senior => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Puppy),
            1 => Some(Self::Adult),
            2 => Some(Self::Senior),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Puppy => "Puppy stage",
            Self::Adult => "Adult stage",
            Self::Senior => "Senior stage",
        }
    }
}

/// Temperament archetype derived from the two behavioral axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    Leader,
    RightHand,
    Citizen,
    Protected,
}

impl Temperament {
    pub const fn ordered() -> [Self; 4] {
        [Self::Leader, Self::RightHand, Self::Citizen, Self::Protected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Leader => "Leader type",
            Self::RightHand => "Right-hand type",
            Self::Citizen => "Citizen type",
            Self::Protected => "Protected type",
        }
    }
}

/// Coarse training-difficulty bucket. Ordered so that `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyRank {
    A,
    B,
    C,
}

impl DifficultyRank {
    pub const fn ordered() -> [Self; 3] {
        [Self::A, Self::B, Self::C]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            _ => None,
        }
    }
}

/// Owner-reported learning aptitude (x axis).
///
/// Converts from any integer by sign so that out-of-range scores from older
/// clients land on the nearest rating instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i8")]
pub enum LearningAptitude {
    Poor,
    Normal,
    Good,
}

impl LearningAptitude {
    pub const fn score(self) -> i8 {
        match self {
            Self::Poor => -1,
            Self::Normal => 0,
            Self::Good => 1,
        }
    }
}

impl From<i64> for LearningAptitude {
    fn from(value: i64) -> Self {
        match value.signum() {
            1 => Self::Good,
            0 => Self::Normal,
            _ => Self::Poor,
        }
    }
}

impl From<i8> for LearningAptitude {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<LearningAptitude> for i8 {
    fn from(value: LearningAptitude) -> Self {
        value.score()
    }
}

/// Owner-reported energy level (y axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i8")]
pub enum Energy {
    Timid,
    Normal,
    High,
}

impl Energy {
    pub const fn score(self) -> i8 {
        match self {
            Self::Timid => -1,
            Self::Normal => 0,
            Self::High => 1,
        }
    }
}

impl From<i64> for Energy {
    fn from(value: i64) -> Self {
        match value.signum() {
            1 => Self::High,
            0 => Self::Normal,
            _ => Self::Timid,
        }
    }
}

impl From<i8> for Energy {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<Energy> for i8 {
    fn from(value: Energy) -> Self {
        value.score()
    }
}

/// Walking gear. Anything other than `"harness"` is treated as a plain lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LeadType {
    #[default]
    Lead,
    Harness,
}

impl LeadType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Harness => "harness",
        }
    }

    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("harness") {
            Self::Harness
        } else {
            Self::Lead
        }
    }
}

impl From<String> for LeadType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Household and handling answers feeding the difficulty rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleFlags {
    #[serde(default)]
    pub multi_dog: bool,
    #[serde(default)]
    pub toy_lover: bool,
    #[serde(default)]
    pub sleeps_with_owner: bool,
    #[serde(default)]
    pub restricted_room: bool,
    #[serde(default)]
    pub lead_type: LeadType,
}

/// Everything the engine needs to diagnose one dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisInput {
    pub breed: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "x")]
    pub learning: LearningAptitude,
    #[serde(rename = "y")]
    pub energy: Energy,
    #[serde(flatten)]
    pub lifestyle: LifestyleFlags,
}

/// Derived diagnosis fields, recomputed whenever any input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisOutcome {
    pub size_class: SizeClass,
    pub age_group: AgeGroup,
    pub temperament: Temperament,
    pub difficulty_rank: DifficultyRank,
    pub difficulty_score: u8,
    pub difficulty_description: String,
}
