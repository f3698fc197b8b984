//! Configuration management for the Fitness Tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::TrackerResult;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report and filter settings used by the demonstration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Sessions above this many calories count as high-calorie
    pub high_calorie_threshold: f64,
    /// Sessions dated after `today - recent_window_days` count as recent
    pub recent_window_days: i64,
    /// How many sessions the "latest workouts" listing shows
    pub recent_count: usize,
    /// Print a JSON export of the demo user at the end of the run
    pub export_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_calorie_threshold: 300.0,
            recent_window_days: 7,
            recent_count: 5,
            export_json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> TrackerResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., FT__REPORT__HIGH_CALORIE_THRESHOLD=400 sets report.high_calorie_threshold
            .add_source(
                config::Environment::with_prefix("FT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
