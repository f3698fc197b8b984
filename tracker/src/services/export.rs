//! Data export service for user snapshots
//!
//! Produces a JSON document with the user's profile, workout history, goals,
//! nutrition plan and derived totals.

use chrono::NaiveDate;
use fitness_tracker_shared::{
    classify_bmi, BmiCategory, FitnessGoal, GoalStatus, NutritionPlan, User, WorkoutSession,
};
use serde::Serialize;

use crate::error::TrackerResult;

/// Version tag written into every export
pub const EXPORT_VERSION: &str = "1.0";

/// Complete user data export
#[derive(Debug, Clone, Serialize)]
pub struct UserExport<'a> {
    pub export_version: &'static str,
    pub user_id: &'a str,
    pub name: &'a str,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub workouts: Vec<WorkoutExport<'a>>,
    pub goals: Vec<GoalExport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_plan: Option<&'a NutritionPlan>,
    pub monthly_calories: [f64; 12],
    pub total_duration_minutes: i64,
    pub total_calories: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutExport<'a> {
    pub summary: String,
    pub total_calories: f64,
    #[serde(flatten)]
    pub session: &'a WorkoutSession,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalExport<'a> {
    pub goal_type: &'a str,
    pub target_value: f64,
    pub current_value: f64,
    pub deadline: NaiveDate,
    pub progress_percent: f64,
    pub status: GoalStatus,
}

impl<'a> From<&'a FitnessGoal> for GoalExport<'a> {
    fn from(goal: &'a FitnessGoal) -> Self {
        Self {
            goal_type: goal.goal_type(),
            target_value: goal.target_value(),
            current_value: goal.current_value(),
            deadline: goal.deadline(),
            progress_percent: goal.progress(),
            status: goal.status(),
        }
    }
}

/// Build an export snapshot of a user
pub fn export_user(user: &User) -> UserExport<'_> {
    let bmi = user.calculate_bmi();
    UserExport {
        export_version: EXPORT_VERSION,
        user_id: user.user_id(),
        name: user.name(),
        age: user.age(),
        weight_kg: user.weight_kg(),
        height_cm: user.height_cm(),
        bmi,
        bmi_category: classify_bmi(bmi),
        workouts: user
            .workout_history()
            .iter()
            .map(|session| WorkoutExport {
                summary: session.summary(),
                total_calories: session.calculate_total_calories(),
                session,
            })
            .collect(),
        goals: user.goals().iter().map(GoalExport::from).collect(),
        nutrition_plan: user.nutrition_plan(),
        monthly_calories: user.monthly_calories_burned(),
        total_duration_minutes: user.total_workout_duration(),
        total_calories: user.total_calories_burned(),
    }
}

/// Serialize a user snapshot as pretty-printed JSON
pub fn export_user_json(user: &User) -> TrackerResult<String> {
    Ok(serde_json::to_string_pretty(&export_user(user))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_shared::{Cardio, NewWorkoutSession, Strength, WorkoutType};

    fn sample_user() -> User {
        let mut user = User::with_profile("U003", "John", 32, 76.0, 178.5);
        user.add_workout_session(
            WorkoutSession::new(NewWorkoutSession {
                session_id: "WS001".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 10),
                workout_type: WorkoutType::Cardio,
                exercises: vec![
                    Cardio::with_details("Morning Run", 30, 5.0, 145).into(),
                    Strength::with_details("Squats", 20, 5, 8, 80.0).into(),
                ],
                total_duration: 50,
                notes: "Mixed".to_string(),
            })
            .unwrap(),
        );
        user.add_goal(
            FitnessGoal::new("Weight Loss", 10.0, 8.0, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), false)
                .unwrap(),
        );
        user.set_nutrition_plan(NutritionPlan::new("Cutting Plan", 2200, 180, 200, 60, ["Oats"]));
        user
    }

    #[test]
    fn test_export_user_snapshot() {
        let user = sample_user();
        let export = export_user(&user);

        assert_eq!(export.export_version, EXPORT_VERSION);
        assert_eq!(export.bmi_category, BmiCategory::Normal);
        assert_eq!(export.workouts.len(), 1);
        assert_eq!(export.workouts[0].total_calories, 810.0);
        assert_eq!(export.goals[0].status, GoalStatus::AlmostThere);
        assert_eq!(export.monthly_calories[2], 810.0);
        assert_eq!(export.total_duration_minutes, 50);
    }

    #[test]
    fn test_export_user_json() {
        let json = export_user_json(&sample_user()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["user_id"], "U003");
        assert_eq!(value["workouts"][0]["session_id"], "WS001");
        assert_eq!(value["workouts"][0]["workout_type"], "CARDIO");
        assert_eq!(value["workouts"][0]["exercises"][0]["kind"], "cardio");
        assert_eq!(value["workouts"][0]["exercises"][1]["sets"], 5);
        assert_eq!(value["goals"][0]["status"], "almost_there");
        assert_eq!(value["nutrition_plan"]["meals"][0], "Oats");
        assert_eq!(value["monthly_calories"].as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn test_export_without_plan_omits_field() {
        let user = User::new("U001", "Hitesh");
        let value: serde_json::Value =
            serde_json::from_str(&export_user_json(&user).unwrap()).unwrap();

        assert!(value.get("nutrition_plan").is_none());
        assert_eq!(value["bmi"], 0.0);
        assert_eq!(value["bmi_category"], "underweight");
    }
}
