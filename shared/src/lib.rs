//! Fitness Tracker Shared Library
//!
//! This crate contains the domain model (exercises, workout sessions, goals,
//! nutrition plans and users), its error types and the validation rules used
//! by the tracker service.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
