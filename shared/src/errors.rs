//! Error types for the Fitness Tracker domain model

use thiserror::Error;

/// Constructor invariant violations on immutable records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Session ID cannot be null or empty")]
    EmptySessionId,

    #[error("Date cannot be null")]
    MissingDate,

    #[error("Duration cannot be negative: {0}")]
    NegativeDuration(i32),

    #[error("Target value must be positive: {0}")]
    NonPositiveTarget(f64),
}

/// Recoverable workout errors
///
/// Raised when a session is not acceptable for recording. Callers are expected
/// to handle these and may retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidWorkout {
    #[error("Workout session cannot be null")]
    NullSession,

    #[error("Workout duration must be positive, got {0}")]
    NonPositiveDuration(i32),

    #[error("Workout must contain at least one exercise")]
    NoExercises,

    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Nutrition plan errors
///
/// These indicate a programmer error (a plan built from out-of-range values)
/// and are not expected to be routinely handled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNutrition {
    #[error("Nutrition plan cannot be null")]
    NullPlan,

    #[error("Daily calories must be between 1000 and 5000, got {0}")]
    CaloriesOutOfRange(i32),

    #[error("Macronutrients cannot be negative")]
    NegativeMacro,
}
