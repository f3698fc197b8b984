//! Health metrics calculations module
//!
//! Provides BMI calculation and classification for user profiles.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **SI Inputs**: Weight in kilograms, height in centimeters

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Calculate BMI from weight (kg) and height (cm)
///
/// Returns 0 when no height is recorded.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI in five-point bands
///
/// The bucket is the BMI truncated toward zero, divided by 5. NaN lands in
/// bucket 0. Anything outside buckets 0 to 5, negatives included, is Obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    match (bmi as i64) / 5 {
        0..=3 => BmiCategory::Underweight,
        4 => BmiCategory::Normal,
        5 => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_calculation() {
        let bmi = calculate_bmi(76.0, 178.5);
        assert!((bmi - 23.85).abs() < 0.01);
    }

    #[test]
    fn test_bmi_without_height() {
        assert_eq!(calculate_bmi(80.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(19.99), BmiCategory::Underweight);
        assert_eq!(classify_bmi(20.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(23.85), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(42.0).to_string(), "Obese");
    }

    #[test]
    fn test_bmi_category_edges() {
        assert_eq!(classify_bmi(f64::NAN), BmiCategory::Underweight);
        assert_eq!(classify_bmi(-4.9), BmiCategory::Underweight);
        assert_eq!(classify_bmi(-5.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(-30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(f64::INFINITY), BmiCategory::Obese);
        assert_eq!(classify_bmi(29.99), BmiCategory::Overweight);
    }

    #[test]
    fn test_negative_weight_classifies_as_obese() {
        let bmi = calculate_bmi(-80.0, 180.0);
        assert_eq!(classify_bmi(bmi), BmiCategory::Obese);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // BMI should always be positive for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            let bmi = calculate_bmi(weight, height);
            prop_assert!(bmi > 0.0);
        }

        #[test]
        fn prop_bmi_increases_with_weight(
            weight in 20.0f64..400.0,
            height in 100.0f64..250.0,
            delta in 1.0f64..50.0
        ) {
            prop_assert!(calculate_bmi(weight + delta, height) > calculate_bmi(weight, height));
        }
    }
}
