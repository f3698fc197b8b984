//! Fitness goals and progress status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Progress bucket for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Achieved,
    TargetReached,
    AlmostThere,
    Halfway,
    KeepGoing,
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Achieved => "Achieved",
            GoalStatus::TargetReached => "Target Reached",
            GoalStatus::AlmostThere => "Almost There",
            GoalStatus::Halfway => "Halfway",
            GoalStatus::KeepGoing => "Keep Going",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measurable target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessGoal {
    goal_type: String,
    target_value: f64,
    current_value: f64,
    deadline: NaiveDate,
    achieved: bool,
}

impl FitnessGoal {
    /// Create a goal; the target must be strictly positive
    pub fn new(
        goal_type: impl Into<String>,
        target_value: f64,
        current_value: f64,
        deadline: NaiveDate,
        achieved: bool,
    ) -> Result<Self, ValidationError> {
        if target_value.is_nan() || target_value <= 0.0 {
            return Err(ValidationError::NonPositiveTarget(target_value));
        }

        Ok(Self {
            goal_type: goal_type.into(),
            target_value,
            current_value,
            deadline,
            achieved,
        })
    }

    pub fn goal_type(&self) -> &str {
        &self.goal_type
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn is_achieved(&self) -> bool {
        self.achieved
    }

    /// Percentage of the target reached. Not clamped.
    pub fn progress(&self) -> f64 {
        (self.current_value / self.target_value) * 100.0
    }

    pub fn status(&self) -> GoalStatus {
        if self.achieved {
            return GoalStatus::Achieved;
        }
        match self.progress() {
            p if p >= 100.0 => GoalStatus::TargetReached,
            p if p >= 75.0 => GoalStatus::AlmostThere,
            p if p >= 50.0 => GoalStatus::Halfway,
            _ => GoalStatus::KeepGoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    fn test_non_positive_target_rejected(#[case] target: f64) {
        let result = FitnessGoal::new("Weight Loss", target, 1.0, deadline(), false);
        assert!(matches!(result, Err(ValidationError::NonPositiveTarget(_))));
    }

    #[test]
    fn test_progress() {
        let goal = FitnessGoal::new("Weight Loss", 10.0, 3.5, deadline(), false).unwrap();
        assert!((goal.progress() - 35.0).abs() < 1e-9);
        assert_eq!(goal.status(), GoalStatus::KeepGoing);
    }

    #[test]
    fn test_progress_is_not_clamped() {
        let over = FitnessGoal::new("Steps", 100.0, 150.0, deadline(), false).unwrap();
        assert_eq!(over.progress(), 150.0);

        let under = FitnessGoal::new("Steps", 100.0, -20.0, deadline(), false).unwrap();
        assert!((under.progress() + 20.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(100.0, GoalStatus::TargetReached)]
    #[case(120.0, GoalStatus::TargetReached)]
    #[case(75.0, GoalStatus::AlmostThere)]
    #[case(99.9, GoalStatus::AlmostThere)]
    #[case(50.0, GoalStatus::Halfway)]
    #[case(74.9, GoalStatus::Halfway)]
    #[case(49.9, GoalStatus::KeepGoing)]
    #[case(0.0, GoalStatus::KeepGoing)]
    fn test_status_ladder(#[case] current: f64, #[case] expected: GoalStatus) {
        let goal = FitnessGoal::new("Distance", 100.0, current, deadline(), false).unwrap();
        assert_eq!(goal.status(), expected);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GoalStatus::TargetReached.to_string(), "Target Reached");
        assert_eq!(GoalStatus::KeepGoing.to_string(), "Keep Going");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_achieved_flag_wins(target in 0.1f64..1000.0, current in -1000.0f64..1000.0) {
            let goal = FitnessGoal::new("Any", target, current, deadline(), true).unwrap();
            prop_assert_eq!(goal.status(), GoalStatus::Achieved);
        }

        #[test]
        fn prop_progress_formula(target in 0.1f64..1000.0, current in -1000.0f64..1000.0) {
            let goal = FitnessGoal::new("Any", target, current, deadline(), false).unwrap();
            prop_assert_eq!(goal.progress(), (current / target) * 100.0);
        }
    }
}
