//! First Light scanner binary.
//!
//! Samples random points across the globe, fetches their sun times from the
//! sunrise-sunset API in bounded batches, and prints the record with the
//! earliest sunrise.
//!
//! # Usage
//!
//! ```bash
//! SUNSET_URL=https://api.sunrise-sunset.org/json cargo run --bin first-light
//! ```
//!
//! # Environment Variables
//!
//! - `SUNSET_URL`: API base URL (required)
//! - `SCAN_POINT_COUNT`: points per run (default: 100)
//! - `SCAN_BATCH_SIZE`: requests per batch (default: 5)
//! - `SCAN_LAT_MIN`/`SCAN_LAT_MAX`, `SCAN_LNG_MIN`/`SCAN_LNG_MAX`:
//!   sampling bounds (default: the full globe)
//! - `SCAN_DATE`: `today` or a `YYYY-MM-DD` date (optional)
//! - `SCAN_FORMATTED`: `0` or `1` (optional)
//! - `RUST_LOG`: log level (default: info)
//!
//! Variables may also be supplied through a `.env` file.

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use first_light::client::SunriseSunsetClient;
use first_light::config::ScanConfig;
use first_light::services::{earliest_sunrise, fetch_all_times, generate_points};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = ScanConfig::from_env()?;
    info!(
        "Scanning {} random points in batches of {}",
        config.point_count, config.batch_size
    );

    let api = SunriseSunsetClient::with_default_client(&config.base_url)?;
    let points = generate_points(config.point_count, &config.bounds);

    let records = fetch_all_times(&api, &points, config.batch_size, &config.options).await;
    info!(
        "Fetched sun times for {} of {} points",
        records.len(),
        points.len()
    );

    match earliest_sunrise(&records) {
        Some(times) => {
            info!(
                "Earliest sunrise at {} (day length {})",
                times.sunrise, times.day_length
            );
            println!("{}", serde_json::to_string_pretty(times)?);
        }
        None => info!("No sun times fetched; nothing to compare"),
    }

    Ok(())
}
