use thiserror::Error;

use crate::models::{SlotCategory, Unit};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid profile field '{field}': {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    #[error("Catalog exhausted on day {day} for {slot}: no meal left after relaxing every constraint")]
    CatalogExhausted { day: u32, slot: SlotCategory },

    #[error("Unit mismatch for '{ingredient}': {expected} vs {found}")]
    UnitMismatch {
        ingredient: String,
        expected: Unit,
        found: Unit,
    },

    #[error("Plan length must be between 1 and {max} days, got {days}")]
    InvalidPlanLength { days: u32, max: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    pub fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
