//! Exercise variants and calorie formulas
//!
//! An [`Exercise`] is one of a closed set of kinds. Every kind exposes a
//! name, a duration in minutes and the calories it burns; the variant
//! payloads carry the effort attributes each formula needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advice printed alongside exercise listings
pub const GENERAL_ADVICE: &str = "Always warm up before exercise and cool down afterwards!";

/// Calories burned per minute of cardio, before the distance bonus
const CARDIO_KCAL_PER_MINUTE: f64 = 8.0;
/// Calories added per kilometre covered
const CARDIO_KCAL_PER_KM: f64 = 50.0;
/// Calories burned per minute of strength work, before the load bonus
const STRENGTH_KCAL_PER_MINUTE: f64 = 6.0;
/// Calories added per kilogram lifted per set
const STRENGTH_KCAL_PER_KG_SET: f64 = 0.5;

/// Distance-based endurance exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cardio {
    pub name: String,
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub heart_rate_bpm: u32,
}

impl Cardio {
    /// Cardio with no recorded distance or heart rate
    pub fn new(name: impl Into<String>, duration_minutes: u32) -> Self {
        Self::with_details(name, duration_minutes, 0.0, 0)
    }

    pub fn with_details(
        name: impl Into<String>,
        duration_minutes: u32,
        distance_km: f64,
        heart_rate_bpm: u32,
    ) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            distance_km,
            heart_rate_bpm,
        }
    }

    /// Calories = duration * 8 + distance * 50
    pub fn calories_burned(&self) -> f64 {
        f64::from(self.duration_minutes) * CARDIO_KCAL_PER_MINUTE
            + self.distance_km * CARDIO_KCAL_PER_KM
    }

    /// Pace in minutes per kilometre, 0 when no distance was covered
    pub fn pace(&self) -> f64 {
        if self.distance_km > 0.0 {
            f64::from(self.duration_minutes) / self.distance_km
        } else {
            0.0
        }
    }
}

impl fmt::Display for Cardio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cardio: {} | Duration: {} min | Distance: {:.2} km | HR: {} bpm | Calories: {:.0}",
            self.name,
            self.duration_minutes,
            self.distance_km,
            self.heart_rate_bpm,
            self.calories_burned().round()
        )
    }
}

/// Resistance exercise measured in sets, reps and load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub name: String,
    pub duration_minutes: u32,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
}

impl Strength {
    /// Strength work with no recorded sets, reps or load
    pub fn new(name: impl Into<String>, duration_minutes: u32) -> Self {
        Self::with_details(name, duration_minutes, 0, 0, 0.0)
    }

    pub fn with_details(
        name: impl Into<String>,
        duration_minutes: u32,
        sets: u32,
        reps: u32,
        weight_kg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            sets,
            reps,
            weight_kg,
        }
    }

    /// Calories = duration * 6 + weight * sets * 0.5
    pub fn calories_burned(&self) -> f64 {
        f64::from(self.duration_minutes) * STRENGTH_KCAL_PER_MINUTE
            + self.weight_kg * f64::from(self.sets) * STRENGTH_KCAL_PER_KG_SET
    }

    /// Total load moved: sets * reps * weight
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.weight_kg
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Strength: {} | Duration: {} min | {}x{} @ {:.1}kg | Volume: {:.1} | Calories: {:.0}",
            self.name,
            self.duration_minutes,
            self.sets,
            self.reps,
            self.weight_kg,
            self.volume(),
            self.calories_burned().round()
        )
    }
}

/// A single exercise performed during a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exercise {
    Cardio(Cardio),
    Strength(Strength),
}

impl Exercise {
    pub fn name(&self) -> &str {
        match self {
            Exercise::Cardio(c) => &c.name,
            Exercise::Strength(s) => &s.name,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Exercise::Cardio(c) => c.duration_minutes,
            Exercise::Strength(s) => s.duration_minutes,
        }
    }

    pub fn calories_burned(&self) -> f64 {
        match self {
            Exercise::Cardio(c) => c.calories_burned(),
            Exercise::Strength(s) => s.calories_burned(),
        }
    }

    /// One-line overview: name, duration and calories
    pub fn info(&self) -> String {
        format!(
            "{} - {} minutes - {:.0} calories",
            self.name(),
            self.duration_minutes(),
            self.calories_burned().round()
        )
    }

    /// Duration as `1h 5m`, or `45m` under an hour
    pub fn formatted_duration(&self) -> String {
        let minutes = self.duration_minutes();
        let (hours, mins) = (minutes / 60, minutes % 60);
        if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}m", mins)
        }
    }
}

impl From<Cardio> for Exercise {
    fn from(cardio: Cardio) -> Self {
        Exercise::Cardio(cardio)
    }
}

impl From<Strength> for Exercise {
    fn from(strength: Strength) -> Self {
        Exercise::Strength(strength)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exercise::Cardio(c) => c.fmt(f),
            Exercise::Strength(s) => s.fmt(f),
        }
    }
}
