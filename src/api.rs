//! Public API surface: DTO types for the sunrise-sunset API payload.
//!
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Sun times reported for one geographic point.
///
/// Depending on the request's `formatted` flag, each value is either a
/// 24-hour `HH:MM:SS` string or a 12-hour `HH:MM:SS AM/PM` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    /// Time of sunrise
    pub sunrise: String,
    /// Time of sunset
    pub sunset: String,
    /// Time the sun crosses the local meridian
    pub solar_noon: String,
    /// Total length of the day
    pub day_length: String,
    /// Civil twilight start (sun 6° below horizon)
    pub civil_twilight_begin: String,
    /// Civil twilight end
    pub civil_twilight_end: String,
    /// Nautical twilight start (sun 12° below horizon)
    pub nautical_twilight_begin: String,
    /// Nautical twilight end
    pub nautical_twilight_end: String,
    /// Astronomical twilight start (sun 18° below horizon)
    pub astronomical_twilight_begin: String,
    /// Astronomical twilight end
    pub astronomical_twilight_end: String,
}

/// Envelope the API wraps every response in.
///
/// The endpoint reports `"OK"` in `status` on success; any other value means
/// the request was rejected even though the HTTP exchange succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimesResponse {
    /// The per-point payload
    pub results: SunTimes,
    /// API-level status, `"OK"` on success
    pub status: String,
}
