//! Batch import of dog rosters exported from shop spreadsheets.

use crate::diagnosis::{DiagnosisInput, Energy, LeadType, LearningAptitude, LifestyleFlags};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: usize, detail: String },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::InvalidRow { line, detail } => {
                write!(f, "roster line {}: {}", line, detail)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One named dog ready for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub input: DiagnosisInput,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    breed: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    birth_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    x: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    y: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    multi_dog: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    toy_lover: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sleeps_with_owner: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    restricted_room: Option<String>,
    #[serde(default)]
    lead_type: String,
}

impl RosterRow {
    fn into_entry(self, line: usize) -> Result<RosterEntry, RosterImportError> {
        let invalid = |detail: String| RosterImportError::InvalidRow { line, detail };

        let birth_date = self
            .birth_date
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|err| invalid(format!("birth_date '{raw}' is not YYYY-MM-DD ({err})")))
            })
            .transpose()?;

        let flag = |column: &str, raw: Option<&str>| -> Result<bool, RosterImportError> {
            match raw {
                None => Ok(false),
                Some(value) => parse_flag(value)
                    .ok_or_else(|| invalid(format!("{column} '{value}' is not a yes/no value"))),
            }
        };

        // Blank axis cells mean "average"; the sign of any integer picks the rating.
        let axis = |column: &str, raw: Option<&str>| -> Result<i64, RosterImportError> {
            match raw {
                None => Ok(0),
                Some(value) => value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| invalid(format!("{column} '{value}' is not an integer"))),
            }
        };
        let learning = LearningAptitude::from(axis("x", self.x.as_deref())?);
        let energy = Energy::from(axis("y", self.y.as_deref())?);

        let lifestyle = LifestyleFlags {
            multi_dog: flag("multi_dog", self.multi_dog.as_deref())?,
            toy_lover: flag("toy_lover", self.toy_lover.as_deref())?,
            sleeps_with_owner: flag("sleeps_with_owner", self.sleeps_with_owner.as_deref())?,
            restricted_room: flag("restricted_room", self.restricted_room.as_deref())?,
            lead_type: LeadType::parse(&self.lead_type),
        };

        Ok(RosterEntry {
            name: self.name,
            input: DiagnosisInput {
                breed: self.breed,
                birth_date,
                learning,
                energy,
                lifestyle,
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
            // Line 1 holds the header.
            entries.push(row?.into_entry(index + 2)?);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "name,breed,birth_date,x,y,multi_dog,toy_lover,sleeps_with_owner,restricted_room,lead_type\n";

    #[test]
    fn parses_rows_into_diagnosis_inputs() {
        let csv = format!(
            "{HEADER}Kotetsu,Shiba Inu,2017-06-15,1,0,no,yes,no,yes,lead\nMugi,Pug,,0,-1,1,0,1,0,harness\n"
        );

        let entries = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");

        assert_eq!(entries.len(), 2);
        let kotetsu = &entries[0];
        assert_eq!(kotetsu.name, "Kotetsu");
        assert_eq!(
            kotetsu.input.birth_date,
            NaiveDate::from_ymd_opt(2017, 6, 15)
        );
        assert_eq!(kotetsu.input.learning, LearningAptitude::Good);
        assert!(kotetsu.input.lifestyle.toy_lover);
        assert!(!kotetsu.input.lifestyle.multi_dog);

        let mugi = &entries[1];
        assert_eq!(mugi.input.birth_date, None);
        assert_eq!(mugi.input.energy, Energy::Timid);
        assert!(mugi.input.lifestyle.sleeps_with_owner);
        assert_eq!(mugi.input.lifestyle.lead_type, LeadType::Harness);
    }

    #[test]
    fn reports_line_of_malformed_date() {
        let csv = format!("{HEADER}Kotetsu,Shiba Inu,2017-06-15,1,0,,,,,\nPochi,Akita,15/06/2019,0,0,,,,,\n");

        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("date rejected");

        match err {
            RosterImportError::InvalidRow { line, detail } => {
                assert_eq!(line, 3);
                assert!(detail.contains("birth_date"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn blank_axis_cells_read_as_average() {
        let csv = format!("{HEADER}Hana,Beagle,2020-01-01,,,,,,,lead\nSora,Akita,2020-01-01,300,,,,,,\n");

        let entries = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");

        assert_eq!(entries[0].input.learning, LearningAptitude::Normal);
        assert_eq!(entries[0].input.energy, Energy::Normal);
        assert_eq!(entries[1].input.learning, LearningAptitude::Good);
        assert_eq!(entries[1].input.energy, Energy::Normal);
    }

    #[test]
    fn reports_line_and_column_of_non_numeric_axis() {
        let csv = format!("{HEADER}Hana,Beagle,2020-01-01,0,0,,,,,\nSora,Akita,2020-01-01,1,lots,,,,,\n");

        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("axis rejected");

        match err {
            RosterImportError::InvalidRow { line, detail } => {
                assert_eq!(line, 3);
                assert!(detail.starts_with("y 'lots'"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unrecognized_flag_values() {
        let csv = format!("{HEADER}Hana,Beagle,2020-01-01,0,0,maybe,,,,\n");

        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("flag rejected");

        assert!(err.to_string().contains("multi_dog"));
    }
}
