//! Business logic services
//!
//! Services encapsulate the registry of users and the reports built from it.

pub mod export;
pub mod fitness;

pub use export::{export_user, export_user_json, UserExport};
pub use fitness::FitnessService;
