//! Geographic point types used as fetch inputs.

use serde::{Deserialize, Serialize};

/// Number of decimal places kept on generated coordinates.
pub const COORD_DECIMAL_PLACES: u32 = 7;

// 10^COORD_DECIMAL_PLACES
const COORD_SCALE: f64 = 1e7;

/// A (latitude, longitude) coordinate pair used as fetch input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, rounding both coordinates to
    /// [`COORD_DECIMAL_PLACES`] decimal places.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round_coord(latitude),
            longitude: round_coord(longitude),
        }
    }
}

fn round_coord(value: f64) -> f64 {
    (value * COORD_SCALE).round() / COORD_SCALE
}

/// Inclusive coordinate ranges random points are drawn from.
///
/// The default covers the full globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBounds {
    /// Smallest latitude a point may take
    pub lat_min: f64,
    /// Largest latitude a point may take
    pub lat_max: f64,
    /// Smallest longitude a point may take
    pub lng_min: f64,
    /// Largest longitude a point may take
    pub lng_max: f64,
}

impl PointBounds {
    /// Create bounds, rejecting ranges that leave the physical coordinate
    /// space or are empty.
    pub fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat_min) || !(-90.0..=90.0).contains(&lat_max) {
            return Err("Latitude bounds must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&lng_min) || !(-180.0..=180.0).contains(&lng_max) {
            return Err("Longitude bounds must be between -180 and 180 degrees".to_string());
        }
        if lat_min >= lat_max {
            return Err(format!(
                "Latitude bounds must have min < max (got {} >= {})",
                lat_min, lat_max
            ));
        }
        if lng_min >= lng_max {
            return Err(format!(
                "Longitude bounds must have min < max (got {} >= {})",
                lng_min, lng_max
            ));
        }
        Ok(Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        })
    }

    /// Whether `point` falls inside these bounds.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.latitude)
            && (self.lng_min..=self.lng_max).contains(&point.longitude)
    }
}

impl Default for PointBounds {
    fn default() -> Self {
        Self {
            lat_min: -90.0,
            lat_max: 90.0,
            lng_min: -180.0,
            lng_max: 180.0,
        }
    }
}
