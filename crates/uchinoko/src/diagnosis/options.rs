use serde::Serialize;

use super::catalog::BreedCatalog;

/// Value/label pair for the behavioral axis pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisOption {
    pub value: i8,
    pub label: &'static str,
}

pub const LEARNING_OPTIONS: [AxisOption; 3] = [
    AxisOption {
        value: -1,
        label: "Slow to learn",
    },
    AxisOption {
        value: 0,
        label: "Average",
    },
    AxisOption {
        value: 1,
        label: "Quick to learn",
    },
];

pub const ENERGY_OPTIONS: [AxisOption; 3] = [
    AxisOption {
        value: -1,
        label: "Timid / reserved",
    },
    AxisOption {
        value: 0,
        label: "Average",
    },
    AxisOption {
        value: 1,
        label: "High energy",
    },
];

pub const WALK_FREQUENCY_OPTIONS: [&str; 5] = [
    "Once a day",
    "Twice a day or more",
    "4-6 times a week",
    "2-3 times a week",
    "Once a week or less",
];

pub const DOG_FOOD_OPTIONS: [&str; 8] = [
    "Royal Canin",
    "Hill's",
    "Purina",
    "Acana",
    "Orijen",
    "Nutro",
    "Science Diet",
    "Other",
];

/// Everything a form needs to render its pickers.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOptions {
    pub breeds: Vec<&'static str>,
    pub learning: Vec<AxisOption>,
    pub energy: Vec<AxisOption>,
    pub walk_frequency: Vec<&'static str>,
    pub dog_food: Vec<&'static str>,
}

impl SelectionOptions {
    pub fn from_catalog(catalog: &BreedCatalog) -> Self {
        Self {
            breeds: catalog.all_breeds(),
            learning: LEARNING_OPTIONS.to_vec(),
            energy: ENERGY_OPTIONS.to_vec(),
            walk_frequency: WALK_FREQUENCY_OPTIONS.to_vec(),
            dog_food: DOG_FOOD_OPTIONS.to_vec(),
        }
    }
}
