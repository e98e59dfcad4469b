//! Random geographic point generation.

use rand::Rng;

use crate::models::{GeoPoint, PointBounds};

/// Generate `n` random points, drawing latitude and longitude independently
/// and uniformly from `bounds`.
///
/// Always returns exactly `n` points; `n = 0` yields an empty vector.
/// Coordinates are rounded to seven decimal places by [`GeoPoint::new`].
pub fn generate_points(n: usize, bounds: &PointBounds) -> Vec<GeoPoint> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            GeoPoint::new(
                rng.random_range(bounds.lat_min..=bounds.lat_max),
                rng.random_range(bounds.lng_min..=bounds.lng_max),
            )
        })
        .collect()
}
