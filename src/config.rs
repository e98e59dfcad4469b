//! Scan configuration and environment variable handling.
//!
//! All configuration is read and validated once at startup; nothing in the
//! pipeline touches the environment afterwards.

use std::env;
use std::num::NonZeroUsize;

use chrono::NaiveDate;

use crate::client::QueryOptions;
use crate::models::PointBounds;

/// Number of points sampled when `SCAN_POINT_COUNT` is unset.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Batch size used when `SCAN_BATCH_SIZE` is unset.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    /// A variable is present but does not parse as expected.
    #[error("{var} must be {expected} (got '{value}')")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    /// The coordinate bounds are unusable.
    #[error("invalid coordinate bounds: {0}")]
    Bounds(String),
}

/// Scan configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base URL of the sunrise-sunset API, without a query string
    pub base_url: String,
    /// Number of random points to sample per run
    pub point_count: usize,
    /// Maximum number of requests in flight at once
    pub batch_size: NonZeroUsize,
    /// Coordinate ranges points are drawn from
    pub bounds: PointBounds,
    /// Optional request parameters forwarded to the API
    pub options: QueryOptions,
}

impl ScanConfig {
    /// Load and validate the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SUNSET_URL` (required): API base URL; a trailing `?` left over
    ///   from older deployments is stripped
    /// - `SCAN_POINT_COUNT` (optional, default: 100): points per run
    /// - `SCAN_BATCH_SIZE` (optional, default: 5): requests per batch,
    ///   must be positive
    /// - `SCAN_LAT_MIN` / `SCAN_LAT_MAX` (optional, default: -90 / 90)
    /// - `SCAN_LNG_MIN` / `SCAN_LNG_MAX` (optional, default: -180 / 180)
    /// - `SCAN_DATE` (optional): `today` or a `YYYY-MM-DD` date
    /// - `SCAN_FORMATTED` (optional): `0` or `1`
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a required variable is missing or any
    /// variable fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("SUNSET_URL").map_err(|_| ConfigError::Missing("SUNSET_URL"))?;
        let base_url = base_url.trim_end_matches('?').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid {
                var: "SUNSET_URL",
                expected: "a non-empty URL",
                value: base_url,
            });
        }

        let point_count = parse_var("SCAN_POINT_COUNT", "a non-negative integer")?
            .unwrap_or(DEFAULT_POINT_COUNT);
        let batch_size =
            parse_var("SCAN_BATCH_SIZE", "a positive integer")?.unwrap_or(DEFAULT_BATCH_SIZE);

        let defaults = PointBounds::default();
        let lat_min = parse_var("SCAN_LAT_MIN", "a number")?.unwrap_or(defaults.lat_min);
        let lat_max = parse_var("SCAN_LAT_MAX", "a number")?.unwrap_or(defaults.lat_max);
        let lng_min = parse_var("SCAN_LNG_MIN", "a number")?.unwrap_or(defaults.lng_min);
        let lng_max = parse_var("SCAN_LNG_MAX", "a number")?.unwrap_or(defaults.lng_max);
        let bounds =
            PointBounds::new(lat_min, lat_max, lng_min, lng_max).map_err(ConfigError::Bounds)?;

        let date = match env::var("SCAN_DATE") {
            Ok(raw) if raw == "today" => Some(raw),
            Ok(raw) => {
                if NaiveDate::parse_from_str(&raw, "%Y-%m-%d").is_err() {
                    return Err(ConfigError::Invalid {
                        var: "SCAN_DATE",
                        expected: "'today' or a YYYY-MM-DD date",
                        value: raw,
                    });
                }
                Some(raw)
            }
            Err(_) => None,
        };

        let formatted = match env::var("SCAN_FORMATTED") {
            Ok(raw) => match raw.as_str() {
                "0" => Some(false),
                "1" => Some(true),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "SCAN_FORMATTED",
                        expected: "0 or 1",
                        value: raw,
                    })
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            point_count,
            batch_size,
            bounds,
            options: QueryOptions {
                date,
                formatted,
                callback: None,
            },
        })
    }
}

/// Read an optional variable, failing only when it is present but invalid.
fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.parse().map(Some).map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value: raw,
        }),
        Err(_) => Ok(None),
    }
}
