//! Input validation functions
//!
//! Stateless rules applied before a session is recorded or a nutrition plan is
//! accepted, plus range predicates for profile values.

use crate::errors::{InvalidNutrition, InvalidWorkout};
use crate::models::{NutritionPlan, WorkoutSession};

/// Accepted daily calorie range for a nutrition plan
pub const DAILY_CALORIES_RANGE: std::ops::RangeInclusive<i32> = 1000..=5000;

/// Plausible BMI range
pub const BMI_RANGE: std::ops::RangeInclusive<f64> = 10.0..=50.0;

/// Supported user age range
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 13..=120;

/// Validate that a session can be recorded
pub fn validate_workout_session(session: Option<&WorkoutSession>) -> Result<(), InvalidWorkout> {
    let session = session.ok_or(InvalidWorkout::NullSession)?;

    if session.total_duration() <= 0 {
        return Err(InvalidWorkout::NonPositiveDuration(session.total_duration()));
    }
    if session.exercises().is_empty() {
        return Err(InvalidWorkout::NoExercises);
    }
    Ok(())
}

/// Validate nutrition plan ranges
pub fn validate_nutrition_plan(plan: Option<&NutritionPlan>) -> Result<(), InvalidNutrition> {
    let plan = plan.ok_or(InvalidNutrition::NullPlan)?;

    if !DAILY_CALORIES_RANGE.contains(&plan.daily_calories()) {
        return Err(InvalidNutrition::CaloriesOutOfRange(plan.daily_calories()));
    }
    if plan.protein_grams() < 0 || plan.carbs_grams() < 0 || plan.fats_grams() < 0 {
        return Err(InvalidNutrition::NegativeMacro);
    }
    Ok(())
}

pub fn is_valid_bmi(bmi: f64) -> bool {
    BMI_RANGE.contains(&bmi)
}

pub fn is_valid_age(age: u32) -> bool {
    AGE_RANGE.contains(&age)
}
