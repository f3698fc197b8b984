//! Fitness service
//!
//! Owns the registry of users and provides:
//! - User registration and lookup
//! - Validated workout recording
//! - Predicate-based workout filtering
//! - Progress and recommendation queries

use std::collections::HashMap;

use fitness_tracker_shared::validation::validate_workout_session;
use fitness_tracker_shared::{Exercise, InvalidWorkout, User, WorkoutSession, WorkoutType};
use tracing::{debug, info, warn};

const SERVICE_INFO: &str = "Fitness Tracking Service v1.0";
const WELCOME_MESSAGE: &str = "Welcome to the Fitness Tracker Application!";
const UNKNOWN_EXERCISE: &str = "Unknown or null exercise";

/// In-memory registry of users keyed by user id
///
/// Not synchronised; wrap it in a lock before sharing across threads.
#[derive(Debug, Default)]
pub struct FitnessService {
    users: HashMap<String, User>,
}

impl FitnessService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_info(&self) -> &'static str {
        SERVICE_INFO
    }

    pub fn welcome_message() -> &'static str {
        WELCOME_MESSAGE
    }

    /// Format a calorie amount for display, e.g. `490 cal`
    pub fn formatted_calories(&self, calories: f64) -> String {
        format!("{:.0} cal", calories.round())
    }

    /// Register a user, replacing any user already stored under the same id
    pub fn add_user(&mut self, user: User) {
        let user_id = user.user_id().to_string();
        if self.users.insert(user_id.clone(), user).is_some() {
            warn!(user_id = %user_id, "Replaced existing user");
        } else {
            info!(user_id = %user_id, "Registered user");
        }
    }

    /// Look up a user; unknown ids are a soft miss
    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn get_user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.get_mut(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Validate a session and append it to the user's history
    ///
    /// Validation runs first, so an invalid session is reported as such even
    /// for an unknown user. Unknown users are a hard failure here, unlike
    /// [`FitnessService::get_user`].
    pub fn add_workout_to_user(
        &mut self,
        user_id: &str,
        session: WorkoutSession,
    ) -> Result<(), InvalidWorkout> {
        if let Err(e) = validate_workout_session(Some(&session)) {
            warn!(user_id = %user_id, session_id = %session.session_id(), error = %e, "Rejected workout");
            return Err(e);
        }

        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| InvalidWorkout::UserNotFound(user_id.to_string()))?;

        debug!(
            user_id = %user_id,
            session_id = %session.session_id(),
            exercises = session.exercise_count(),
            "Recorded workout"
        );
        user.add_workout_session(session);
        Ok(())
    }

    /// Sessions of a user matching `predicate`, in history order
    pub fn filter_workouts<P>(&self, user_id: &str, predicate: P) -> Vec<&WorkoutSession>
    where
        P: Fn(&WorkoutSession) -> bool,
    {
        match self.users.get(user_id) {
            Some(user) => user
                .workout_history()
                .iter()
                .filter(|session| predicate(*session))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Total calories burned by a user, 0 for unknown ids
    pub fn calculate_user_progress(&self, user_id: &str) -> f64 {
        self.users
            .get(user_id)
            .map(User::total_calories_burned)
            .unwrap_or(0.0)
    }

    /// Names of all registered users, sorted
    pub fn user_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.values().map(|u| u.name().to_string()).collect();
        names.sort();
        names
    }

    pub fn workout_recommendation(&self, workout_type: WorkoutType) -> &'static str {
        match workout_type {
            WorkoutType::Cardio => "Great for heart health! Aim for 150 minutes per week.",
            WorkoutType::Strength => "Build muscle and boost metabolism. Train 3-4 times weekly.",
            WorkoutType::Hiit => "Maximum calorie burn! Keep sessions under 30 minutes.",
            WorkoutType::Yoga => {
                "Perfect for flexibility and stress relief. Practice daily if possible."
            }
            WorkoutType::Flexibility => {
                "Essential for injury prevention. Stretch after every workout."
            }
        }
    }

    /// Describe an exercise by its defining attribute
    pub fn analyze_exercise(&self, exercise: Option<&Exercise>) -> String {
        match exercise {
            Some(Exercise::Cardio(cardio)) => format!(
                "Cardio workout: {} covering {:.2} km",
                cardio.name, cardio.distance_km
            ),
            Some(Exercise::Strength(strength)) => format!(
                "Strength training: {} with {:.1} kg",
                strength.name, strength.weight_kg
            ),
            None => UNKNOWN_EXERCISE.to_string(),
        }
    }
}
