//! Dog temperament diagnosis and the dog profile workflow behind the
//! pet-service marketplace.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod profiles;
pub mod roster;
pub mod telemetry;
