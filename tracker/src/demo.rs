//! Demonstration run
//!
//! Registers a few users and walks through every tracker operation, writing
//! a human-readable transcript. The transcript wording is informational only.

use std::io::Write;

use chrono::{Duration, Months, NaiveDate};
use fitness_tracker_shared::models::exercise::GENERAL_ADVICE;
use fitness_tracker_shared::validation::validate_nutrition_plan;
use fitness_tracker_shared::{
    classify_bmi, Cardio, Exercise, FitnessGoal, InvalidWorkout, NewWorkoutSession, NutritionPlan,
    Strength, User, WorkoutSession, WorkoutType,
};
use tracing::info;

use crate::config::ReportConfig;
use crate::error::TrackerResult;
use crate::services::{export_user_json, FitnessService};

/// User the walkthrough records sessions, goals and a plan for
pub const DEMO_USER_ID: &str = "U003";

/// Run the full walkthrough against `service`, writing to `out`
pub fn run<W: Write>(
    service: &mut FitnessService,
    report: &ReportConfig,
    today: NaiveDate,
    out: &mut W,
) -> TrackerResult<()> {
    rule(out)?;
    writeln!(out, "{}", FitnessService::welcome_message())?;
    writeln!(out, "{}", service.service_info())?;
    rule(out)?;

    basic_features(service, out)?;
    rule(out)?;
    records_and_plans(service, today, out)?;
    rule(out)?;
    error_handling(service, today, out)?;
    rule(out)?;
    filters(service, report, today, out)?;
    rule(out)?;
    dispatch(service, out)?;

    if report.export_json {
        rule(out)?;
        writeln!(out, ">>> JSON EXPORT <<<\n")?;
        writeln!(out, "{}", export_user_json(demo_user(service)?)?)?;
    }

    rule(out)?;
    writeln!(out, "Application completed successfully!")?;
    rule(out)?;

    info!(users = service.user_count(), "Demonstration complete");
    Ok(())
}

fn rule<W: Write>(out: &mut W) -> TrackerResult<()> {
    writeln!(out, "{}", "=".repeat(80))?;
    Ok(())
}

fn demo_user(service: &FitnessService) -> TrackerResult<&User> {
    Ok(service
        .get_user(DEMO_USER_ID)
        .ok_or_else(|| InvalidWorkout::UserNotFound(DEMO_USER_ID.to_string()))?)
}

fn demo_user_mut(service: &mut FitnessService) -> TrackerResult<&mut User> {
    Ok(service
        .get_user_mut(DEMO_USER_ID)
        .ok_or_else(|| InvalidWorkout::UserNotFound(DEMO_USER_ID.to_string()))?)
}

fn basic_features<W: Write>(service: &mut FitnessService, out: &mut W) -> TrackerResult<()> {
    writeln!(out, ">>> USERS AND PROFILES <<<\n")?;

    service.add_user(User::new("U001", "Hitesh"));
    service.add_user(User::with_age("U002", "Sarah", 28));
    service.add_user(User::with_profile(DEMO_USER_ID, "John", 32, 75.5, 178.0));

    let user = demo_user_mut(service)?;
    user.set_weight(76.0);
    user.set_height(178.5);

    writeln!(out, "{}", user.profile())?;
    writeln!(out, "BMI: {:.2}", user.calculate_bmi())?;
    writeln!(
        out,
        "Monthly calories tracking initialized ({} months)\n",
        user.monthly_calories_burned().len()
    )?;
    Ok(())
}

fn records_and_plans<W: Write>(
    service: &mut FitnessService,
    today: NaiveDate,
    out: &mut W,
) -> TrackerResult<()> {
    writeln!(out, ">>> WORKOUT TYPES <<<\n")?;
    for workout_type in WorkoutType::ALL {
        writeln!(out, "{}", workout_type)?;
    }

    writeln!(out, "\n>>> EXERCISES <<<\n")?;
    let run: Exercise = Cardio::with_details("Morning Run", 30, 5.0, 145).into();
    let jog: Exercise = Cardio::with_details("Evening Jog", 20, 3.5, 130).into();
    let bench: Exercise = Strength::with_details("Bench Press", 25, 4, 10, 60.0).into();
    let squats: Exercise = Strength::with_details("Squats", 20, 5, 8, 80.0).into();

    writeln!(out, "{}", GENERAL_ADVICE)?;
    for exercise in [&run, &jog, &bench, &squats] {
        writeln!(out, "{} ({})", exercise.info(), exercise.formatted_duration())?;
        writeln!(out, "  {}", exercise)?;
    }

    writeln!(out, "\n>>> SESSIONS <<<\n")?;
    let cardio_day = WorkoutSession::new(NewWorkoutSession {
        session_id: "WS001".to_string(),
        date: Some(today),
        workout_type: WorkoutType::Cardio,
        exercises: vec![run, jog],
        total_duration: 50,
        notes: "Great morning workout!".to_string(),
    })?;
    let leg_day = WorkoutSession::new(NewWorkoutSession {
        session_id: "WS002".to_string(),
        date: Some(today - Duration::days(1)),
        workout_type: WorkoutType::Strength,
        exercises: vec![bench, squats],
        total_duration: 45,
        notes: "Leg day complete".to_string(),
    })?;

    writeln!(out, "{}", cardio_day.summary())?;
    writeln!(out, "Session ID: {}", cardio_day.session_id())?;
    writeln!(out, "Date: {}", cardio_day.date())?;
    writeln!(out, "Total Calories: {}", cardio_day.calculate_total_calories())?;

    let user = demo_user_mut(service)?;
    user.add_workout_sessions([cardio_day, leg_day]);

    writeln!(out, "\n>>> GOALS <<<\n")?;
    let deadline = today.checked_add_months(Months::new(3)).unwrap_or(today);
    let goal = FitnessGoal::new("Weight Loss", 10.0, 3.5, deadline, false)?;
    writeln!(out, "Goal Progress: {:.1}%", goal.progress())?;
    writeln!(out, "Goal Status: {}", goal.status())?;
    user.add_goal(goal);

    writeln!(out, "\n>>> NUTRITION PLAN <<<\n")?;
    let mut meals = vec![
        "Breakfast: Oats with protein".to_string(),
        "Lunch: Chicken with rice".to_string(),
        "Dinner: Fish with vegetables".to_string(),
        "Snacks: Nuts and fruits".to_string(),
    ];
    let plan = NutritionPlan::new("Cutting Plan", 2200, 180, 200, 60, meals.iter().cloned());
    validate_nutrition_plan(Some(&plan))?;
    writeln!(out, "{}", plan)?;
    writeln!(out, "Protein: {:.1}%", plan.protein_percentage())?;

    meals.push("Extra meal".to_string());
    writeln!(
        out,
        "Source list now has {} meals, the plan still has {}",
        meals.len(),
        plan.meals().len()
    )?;
    user.set_nutrition_plan(plan);
    writeln!(out)?;
    Ok(())
}

fn error_handling<W: Write>(
    service: &mut FitnessService,
    today: NaiveDate,
    out: &mut W,
) -> TrackerResult<()> {
    writeln!(out, ">>> ERROR HANDLING <<<\n")?;

    writeln!(out, "--- Recoverable ---")?;
    let empty = WorkoutSession::new(NewWorkoutSession {
        session_id: "INVALID".to_string(),
        date: Some(today),
        workout_type: WorkoutType::Cardio,
        exercises: Vec::new(),
        total_duration: 0,
        notes: "Invalid".to_string(),
    })?;
    if let Err(e) = service.add_workout_to_user(DEMO_USER_ID, empty) {
        writeln!(out, "Caught workout error: {}", e)?;
    }

    writeln!(out, "\n--- Programmer error ---")?;
    let oversized = NutritionPlan::new("Invalid Plan", 6000, 200, 300, 100, ["Meal1"]);
    if let Err(e) = validate_nutrition_plan(Some(&oversized)) {
        writeln!(out, "Caught nutrition error: {}", e)?;
    }
    writeln!(out)?;
    Ok(())
}

fn filters<W: Write>(
    service: &FitnessService,
    report: &ReportConfig,
    today: NaiveDate,
    out: &mut W,
) -> TrackerResult<()> {
    writeln!(out, ">>> FILTERS AND QUERIES <<<\n")?;

    let threshold = report.high_calorie_threshold;
    writeln!(out, "High calorie workouts (>{} cal):", threshold)?;
    for session in service.filter_workouts(DEMO_USER_ID, |s| s.calculate_total_calories() > threshold) {
        writeln!(out, "  - {}", session.summary())?;
    }

    let cutoff = today - Duration::days(report.recent_window_days);
    writeln!(out, "\nRecent workouts (last {} days):", report.recent_window_days)?;
    for session in service.filter_workouts(DEMO_USER_ID, |s| s.date() > cutoff) {
        writeln!(out, "  - {}", session.summary())?;
    }

    let user = demo_user(service)?;
    writeln!(out, "\nLatest {} workouts:", report.recent_count)?;
    for session in user.recent_workouts(report.recent_count) {
        writeln!(out, "  - {}", session.summary())?;
    }

    let in_window = user.workouts_in_date_range(cutoff, today);
    writeln!(out, "\nWorkouts between {} and {}: {}", cutoff, today, in_window.len())?;

    writeln!(out, "\nAll user names:")?;
    for name in service.user_names() {
        writeln!(out, "{}", name)?;
    }

    writeln!(
        out,
        "\nTotal calories burned: {}",
        service.formatted_calories(service.calculate_user_progress(DEMO_USER_ID))
    )?;
    writeln!(out, "Total workout minutes: {}", user.total_workout_duration())?;
    writeln!(out)?;
    Ok(())
}

fn dispatch<W: Write>(service: &FitnessService, out: &mut W) -> TrackerResult<()> {
    writeln!(out, ">>> RECOMMENDATIONS AND ANALYSIS <<<\n")?;

    for workout_type in [WorkoutType::Cardio, WorkoutType::Strength, WorkoutType::Hiit] {
        writeln!(
            out,
            "{}: {}",
            workout_type.name(),
            service.workout_recommendation(workout_type)
        )?;
    }
    writeln!(out)?;

    let sprint: Exercise = Cardio::with_details("Sprint", 15, 2.5, 160).into();
    let deadlift: Exercise = Strength::with_details("Deadlift", 30, 5, 5, 100.0).into();
    writeln!(out, "{}", service.analyze_exercise(Some(&sprint)))?;
    writeln!(out, "{}", service.analyze_exercise(Some(&deadlift)))?;
    writeln!(out, "{}", service.analyze_exercise(None))?;
    writeln!(out)?;

    let bmi = demo_user(service)?.calculate_bmi();
    writeln!(out, "BMI Category: {} (BMI: {:.2})", classify_bmi(bmi), bmi)?;
    Ok(())
}
