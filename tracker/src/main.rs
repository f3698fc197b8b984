//! Fitness Tracker
//!
//! Builds an in-memory registry of users and prints a walkthrough of every
//! tracker operation to stdout. Logs go to stderr.

use anyhow::Result;
use fitness_tracker::{config, demo, services::FitnessService};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Fitness Tracker"
    );

    let mut service = FitnessService::new();
    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    demo::run(&mut service, &config.report, today, &mut out)?;

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_tracker=info".into()
        } else {
            "fitness_tracker=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
