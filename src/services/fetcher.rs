//! Batched sun-times fetching.
//!
//! Points are partitioned into fixed-size batches. All requests inside a
//! batch run concurrently; the next batch is not started until every request
//! in the current one has settled. This bounds the number of requests in
//! flight to the batch size, which is the pipeline's only form of admission
//! control.

use std::num::NonZeroUsize;

use futures::future;
use tracing::warn;

use crate::api::SunTimes;
use crate::client::{QueryOptions, SunTimesSource};
use crate::models::GeoPoint;

/// Fetch sun times for every point, at most `batch_size` requests at a time.
///
/// Successful responses are collected in input order: batches are processed
/// in submission order and results inside a batch keep the batch's declared
/// order regardless of completion order. A point whose fetch fails is logged
/// and dropped; it never affects sibling requests or later batches, and no
/// request is retried.
///
/// An empty `points` slice returns an empty vector without issuing any
/// requests.
pub async fn fetch_all_times<S: SunTimesSource>(
    source: &S,
    points: &[GeoPoint],
    batch_size: NonZeroUsize,
    options: &QueryOptions,
) -> Vec<SunTimes> {
    let mut collected = Vec::with_capacity(points.len());

    for batch in points.chunks(batch_size.get()) {
        let settled = future::join_all(
            batch.iter().map(|point| source.sun_times(point, options)),
        )
        .await;

        for (point, outcome) in batch.iter().zip(settled) {
            match outcome {
                Ok(times) => collected.push(times),
                Err(error) => warn!(
                    latitude = point.latitude,
                    longitude = point.longitude,
                    %error,
                    "sun times fetch failed; dropping point"
                ),
            }
        }
    }

    collected
}
