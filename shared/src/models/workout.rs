//! Workout types and recorded workout sessions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::exercise::Exercise;
use crate::errors::ValidationError;

/// Workout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Hiit,
    Yoga,
}

impl WorkoutType {
    /// Every workout type, in declaration order
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Flexibility,
        WorkoutType::Hiit,
        WorkoutType::Yoga,
    ];

    /// Upper-case identifier, e.g. `HIIT`
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "CARDIO",
            WorkoutType::Strength => "STRENGTH",
            WorkoutType::Flexibility => "FLEXIBILITY",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Yoga => "YOGA",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardiovascular Exercise",
            WorkoutType::Strength => "Strength Training",
            WorkoutType::Flexibility => "Flexibility & Stretching",
            WorkoutType::Hiit => "High Intensity Interval Training",
            WorkoutType::Yoga => "Yoga & Mindfulness",
        }
    }

    /// Average burn rate for this kind of workout
    pub fn calories_per_minute(&self) -> f64 {
        match self {
            WorkoutType::Cardio => 8.0,
            WorkoutType::Strength => 6.0,
            WorkoutType::Flexibility => 3.0,
            WorkoutType::Hiit => 10.0,
            WorkoutType::Yoga => 4.0,
        }
    }

    /// Estimated calories for a workout of the given length
    pub fn calculate_calories(&self, duration_minutes: u32) -> f64 {
        self.calories_per_minute() * f64::from(duration_minutes)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {:.1} cal/min",
            self.name(),
            self.description(),
            self.calories_per_minute()
        )
    }
}

/// Input for recording a workout session
#[derive(Debug, Clone)]
pub struct NewWorkoutSession {
    pub session_id: String,
    pub date: Option<NaiveDate>,
    pub workout_type: WorkoutType,
    pub exercises: Vec<Exercise>,
    pub total_duration: i32,
    pub notes: String,
}

/// A dated workout with the exercises performed
///
/// Sessions are immutable once built. The exercise list is owned by the
/// session, so nothing the caller does to its own list afterwards is visible
/// here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSession {
    session_id: String,
    date: NaiveDate,
    workout_type: WorkoutType,
    exercises: Vec<Exercise>,
    total_duration: i32,
    notes: String,
}

impl WorkoutSession {
    /// Build a session, rejecting a blank id, a missing date or a negative duration
    pub fn new(input: NewWorkoutSession) -> Result<Self, ValidationError> {
        if input.session_id.trim().is_empty() {
            return Err(ValidationError::EmptySessionId);
        }
        let date = input.date.ok_or(ValidationError::MissingDate)?;
        if input.total_duration < 0 {
            return Err(ValidationError::NegativeDuration(input.total_duration));
        }

        Ok(Self {
            session_id: input.session_id,
            date,
            workout_type: input.workout_type,
            exercises: input.exercises,
            total_duration: input.total_duration,
            notes: input.notes,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn total_duration(&self) -> i32 {
        self.total_duration
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Sum of the calories burned by every exercise in the session
    pub fn calculate_total_calories(&self) -> f64 {
        self.exercises.iter().map(Exercise::calories_burned).sum()
    }

    /// One-line report of the session
    pub fn summary(&self) -> String {
        format!(
            "Session {} on {}: {} - {} exercises, {} min, {} cal",
            self.session_id,
            self.date,
            self.workout_type.name(),
            self.exercise_count(),
            self.total_duration,
            self.calculate_total_calories().round() as i64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::{Cardio, Strength};
    use rstest::rstest;

    fn input(session_id: &str, date: Option<NaiveDate>, total_duration: i32) -> NewWorkoutSession {
        NewWorkoutSession {
            session_id: session_id.to_string(),
            date,
            workout_type: WorkoutType::Cardio,
            exercises: vec![Cardio::with_details("Morning Run", 30, 5.0, 145).into()],
            total_duration,
            notes: "Great morning workout!".to_string(),
        }
    }

    fn march_10() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, 10)
    }

    #[rstest]
    #[case(WorkoutType::Cardio, 8.0, "Cardiovascular Exercise")]
    #[case(WorkoutType::Strength, 6.0, "Strength Training")]
    #[case(WorkoutType::Flexibility, 3.0, "Flexibility & Stretching")]
    #[case(WorkoutType::Hiit, 10.0, "High Intensity Interval Training")]
    #[case(WorkoutType::Yoga, 4.0, "Yoga & Mindfulness")]
    fn test_workout_type_table(
        #[case] workout_type: WorkoutType,
        #[case] rate: f64,
        #[case] description: &str,
    ) {
        assert_eq!(workout_type.calories_per_minute(), rate);
        assert_eq!(workout_type.description(), description);
        assert_eq!(workout_type.calculate_calories(30), rate * 30.0);
    }

    #[test]
    fn test_workout_type_display() {
        assert_eq!(
            WorkoutType::Hiit.to_string(),
            "HIIT (High Intensity Interval Training) - 10.0 cal/min"
        );
        assert_eq!(WorkoutType::ALL.len(), 5);
    }

    #[test]
    fn test_valid_session() {
        let session = WorkoutSession::new(input("WS001", march_10(), 50)).unwrap();
        assert_eq!(session.session_id(), "WS001");
        assert_eq!(session.exercise_count(), 1);
        assert_eq!(session.calculate_total_calories(), 490.0);
        assert_eq!(session.notes(), "Great morning workout!");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_session_id_rejected(#[case] id: &str) {
        let err = WorkoutSession::new(input(id, march_10(), 50)).unwrap_err();
        assert_eq!(err, ValidationError::EmptySessionId);
    }

    #[test]
    fn test_missing_date_rejected() {
        let err = WorkoutSession::new(input("WS001", None, 50)).unwrap_err();
        assert_eq!(err, ValidationError::MissingDate);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = WorkoutSession::new(input("WS001", march_10(), -5)).unwrap_err();
        assert_eq!(err, ValidationError::NegativeDuration(-5));
    }

    #[test]
    fn test_zero_duration_accepted_at_construction() {
        assert!(WorkoutSession::new(input("WS001", march_10(), 0)).is_ok());
    }

    #[test]
    fn test_source_list_changes_are_not_visible() {
        let mut source: Vec<Exercise> = vec![
            Strength::with_details("Bench Press", 25, 4, 10, 60.0).into(),
            Strength::with_details("Squats", 20, 5, 8, 80.0).into(),
        ];
        let mut new = input("WS002", march_10(), 45);
        new.exercises = source.clone();
        let session = WorkoutSession::new(new).unwrap();

        source.push(Cardio::new("Cooldown", 10).into());
        source.clear();

        assert_eq!(session.exercise_count(), 2);
        assert_eq!(session.exercises()[0].name(), "Bench Press");
        assert_eq!(session.calculate_total_calories(), 590.0);
    }

    #[test]
    fn test_summary() {
        let mut new = input("WS001", march_10(), 50);
        new.exercises.push(Cardio::with_details("Evening Jog", 20, 3.5, 130).into());
        let session = WorkoutSession::new(new).unwrap();

        assert_eq!(
            session.summary(),
            "Session WS001 on 2024-03-10: CARDIO - 2 exercises, 50 min, 825 cal"
        );
    }
}
