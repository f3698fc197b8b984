//! Daily nutrition plans

use serde::Serialize;
use std::fmt;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily calorie and macronutrient plan
///
/// Construction does not range-check anything; see
/// [`crate::validation::validate_nutrition_plan`]. The meal list is copied in
/// and only exposed as a shared slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPlan {
    plan_name: String,
    daily_calories: i32,
    protein_grams: i32,
    carbs_grams: i32,
    fats_grams: i32,
    meals: Vec<String>,
}

impl NutritionPlan {
    pub fn new<I, S>(
        plan_name: impl Into<String>,
        daily_calories: i32,
        protein_grams: i32,
        carbs_grams: i32,
        fats_grams: i32,
        meals: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plan_name: plan_name.into(),
            daily_calories,
            protein_grams,
            carbs_grams,
            fats_grams,
            meals: meals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn daily_calories(&self) -> i32 {
        self.daily_calories
    }

    pub fn protein_grams(&self) -> i32 {
        self.protein_grams
    }

    pub fn carbs_grams(&self) -> i32 {
        self.carbs_grams
    }

    pub fn fats_grams(&self) -> i32 {
        self.fats_grams
    }

    pub fn meals(&self) -> &[String] {
        &self.meals
    }

    /// Combined grams of protein, carbs and fat
    pub fn total_macros(&self) -> i64 {
        i64::from(self.protein_grams) + i64::from(self.carbs_grams) + i64::from(self.fats_grams)
    }

    pub fn protein_percentage(&self) -> f64 {
        self.share_of_daily(f64::from(self.protein_grams) * KCAL_PER_GRAM_PROTEIN)
    }

    pub fn carbs_percentage(&self) -> f64 {
        self.share_of_daily(f64::from(self.carbs_grams) * KCAL_PER_GRAM_CARBS)
    }

    pub fn fats_percentage(&self) -> f64 {
        self.share_of_daily(f64::from(self.fats_grams) * KCAL_PER_GRAM_FAT)
    }

    /// Percentage of the daily calories; 0 when the plan has no calories
    fn share_of_daily(&self, kcal: f64) -> f64 {
        if self.daily_calories <= 0 {
            return 0.0;
        }
        kcal / f64::from(self.daily_calories) * 100.0
    }
}

impl fmt::Display for NutritionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} cal/day | P: {}g ({:.1}%) | C: {}g ({:.1}%) | F: {}g ({:.1}%) | {} meals",
            self.plan_name,
            self.daily_calories,
            self.protein_grams,
            self.protein_percentage(),
            self.carbs_grams,
            self.carbs_percentage(),
            self.fats_grams,
            self.fats_percentage(),
            self.meals.len()
        )
    }
}
