//! User aggregate: profile, workout history, goals and nutrition plan

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::goal::FitnessGoal;
use super::nutrition::NutritionPlan;
use super::workout::WorkoutSession;
use crate::health_metrics::calculate_bmi;

/// One tracked person
///
/// Profile fields are freely settable. History and goals only grow through
/// the `add_*` methods; readers get shared slices.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    user_id: String,
    name: String,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    workout_history: Vec<WorkoutSession>,
    goals: Vec<FitnessGoal>,
    nutrition_plan: Option<NutritionPlan>,
}

impl User {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_profile(user_id, name, 0, 0.0, 0.0)
    }

    pub fn with_age(user_id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self::with_profile(user_id, name, age, 0.0, 0.0)
    }

    pub fn with_profile(
        user_id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            age,
            weight_kg,
            height_cm,
            workout_history: Vec::new(),
            goals: Vec::new(),
            nutrition_plan: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
    }

    pub fn workout_history(&self) -> &[WorkoutSession] {
        &self.workout_history
    }

    pub fn goals(&self) -> &[FitnessGoal] {
        &self.goals
    }

    pub fn nutrition_plan(&self) -> Option<&NutritionPlan> {
        self.nutrition_plan.as_ref()
    }

    /// Replace the current plan, if any
    pub fn set_nutrition_plan(&mut self, plan: NutritionPlan) {
        self.nutrition_plan = Some(plan);
    }

    pub fn add_workout_session(&mut self, session: WorkoutSession) {
        self.workout_history.push(session);
    }

    /// Append several sessions, keeping their order
    pub fn add_workout_sessions(&mut self, sessions: impl IntoIterator<Item = WorkoutSession>) {
        self.workout_history.extend(sessions);
    }

    pub fn add_goal(&mut self, goal: FitnessGoal) {
        self.goals.push(goal);
    }

    pub fn calculate_bmi(&self) -> f64 {
        calculate_bmi(self.weight_kg, self.height_cm)
    }

    /// The last `count` sessions in insertion order
    pub fn recent_workouts(&self, count: usize) -> &[WorkoutSession] {
        let start = self.workout_history.len().saturating_sub(count);
        &self.workout_history[start..]
    }

    /// Sessions dated within `start..=end`
    pub fn workouts_in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&WorkoutSession> {
        self.workout_history
            .iter()
            .filter(|session| (start..=end).contains(&session.date()))
            .collect()
    }

    /// Calories burned per calendar month, January first
    pub fn monthly_calories_burned(&self) -> [f64; 12] {
        let mut monthly = [0.0; 12];
        for session in &self.workout_history {
            monthly[session.date().month0() as usize] += session.calculate_total_calories();
        }
        monthly
    }

    pub fn total_workout_duration(&self) -> i64 {
        self.workout_history
            .iter()
            .map(|session| i64::from(session.total_duration()))
            .sum()
    }

    pub fn total_calories_burned(&self) -> f64 {
        self.workout_history
            .iter()
            .map(WorkoutSession::calculate_total_calories)
            .sum()
    }

    /// Multi-line profile report
    pub fn profile(&self) -> String {
        format!(
            "=== User Profile ===\n\
             ID: {}\n\
             Name: {}\n\
             Age: {} years\n\
             Weight: {:.1} kg\n\
             Height: {:.1} cm\n\
             BMI: {:.2}\n\
             Total Workouts: {}\n\
             Active Goals: {}\n",
            self.user_id,
            self.name,
            self.age,
            self.weight_kg,
            self.height_cm,
            self.calculate_bmi(),
            self.workout_history.len(),
            self.goals.len()
        )
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User[id={}, name={}, age={}, workouts={}]",
            self.user_id,
            self.name,
            self.age,
            self.workout_history.len()
        )
    }
}
