//! Data models for the Fitness Tracker application

pub mod exercise;
pub mod goal;
pub mod nutrition;
pub mod user;
pub mod workout;

pub use exercise::{Cardio, Exercise, Strength};
pub use goal::{FitnessGoal, GoalStatus};
pub use nutrition::NutritionPlan;
pub use user::User;
pub use workout::{NewWorkoutSession, WorkoutSession, WorkoutType};
