//! Application error handling
//!
//! Collects the domain errors from the shared crate together with the
//! failures the application layer itself can hit (configuration, export,
//! writing the report).

use fitness_tracker_shared::{InvalidNutrition, InvalidWorkout, ValidationError};
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid workout: {0}")]
    Workout(#[from] InvalidWorkout),

    #[error("Invalid nutrition plan: {0}")]
    Nutrition(#[from] InvalidNutrition),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// Whether the caller can fix the input and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TrackerError::Workout(_))
    }
}

/// Result type alias for application operations
pub type TrackerResult<T> = Result<T, TrackerError>;
