//! Common test utilities for integration tests
//!
//! Builders for sessions and a registry seeded with the sample users.

#![allow(dead_code)]

use chrono::NaiveDate;
use fitness_tracker::services::FitnessService;
use fitness_tracker_shared::{Exercise, NewWorkoutSession, User, WorkoutSession, WorkoutType};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Build a session that is known to pass construction checks
pub fn session(
    id: &str,
    on: NaiveDate,
    workout_type: WorkoutType,
    exercises: Vec<Exercise>,
    total_duration: i32,
) -> WorkoutSession {
    WorkoutSession::new(NewWorkoutSession {
        session_id: id.to_string(),
        date: Some(on),
        workout_type,
        exercises,
        total_duration,
        notes: String::new(),
    })
    .expect("valid session")
}

/// Registry with Hitesh (U001), Sarah (U002) and John (U003)
pub fn seeded_service() -> FitnessService {
    let mut service = FitnessService::new();
    service.add_user(User::new("U001", "Hitesh"));
    service.add_user(User::with_age("U002", "Sarah", 28));
    service.add_user(User::with_profile("U003", "John", 32, 75.5, 178.0));
    service
}
