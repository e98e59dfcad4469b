//! Batch fetcher behavior against a scripted in-memory source.
//!
//! Points are constructed with their index as the latitude so the scripted
//! source can tell them apart and the tests can assert on ordering.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use first_light::api::SunTimes;
use first_light::client::{FetchError, QueryOptions, SunTimesSource};
use first_light::models::GeoPoint;
use first_light::services::fetch_all_times;

fn batch(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).expect("test batch size must be positive")
}

fn indexed_points(n: usize) -> Vec<GeoPoint> {
    (0..n).map(|i| GeoPoint::new(i as f64, 0.0)).collect()
}

fn times_for(index: usize) -> SunTimes {
    SunTimes {
        sunrise: format!("{:02}:00:00", index),
        sunset: format!("point-{}", index),
        solar_noon: "12:00:00".to_string(),
        day_length: "12:00:00".to_string(),
        civil_twilight_begin: "06:00:00".to_string(),
        civil_twilight_end: "18:30:00".to_string(),
        nautical_twilight_begin: "05:30:00".to_string(),
        nautical_twilight_end: "19:00:00".to_string(),
        astronomical_twilight_begin: "05:00:00".to_string(),
        astronomical_twilight_end: "19:30:00".to_string(),
    }
}

/// A `SunTimesSource` that fails scripted indices and records call order and
/// how many requests were in flight at once.
#[derive(Default)]
struct ScriptedSource {
    failing: HashSet<usize>,
    calls: Mutex<Vec<usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSource {
    fn failing_at(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    fn call_order(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SunTimesSource for ScriptedSource {
    async fn sun_times(
        &self,
        point: &GeoPoint,
        _options: &QueryOptions,
    ) -> Result<SunTimes, FetchError> {
        let index = point.latitude as usize;
        self.calls.lock().unwrap().push(index);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // Suspend so every sibling in the batch starts before any finishes
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(&index) {
            return Err(FetchError::Api {
                status: "INVALID_REQUEST".to_string(),
            });
        }
        Ok(times_for(index))
    }
}

#[tokio::test]
async fn all_successes_preserve_input_order() {
    let source = ScriptedSource::default();
    let points = indexed_points(7);

    let records = fetch_all_times(&source, &points, batch(3), &QueryOptions::default()).await;

    let labels: Vec<_> = records.iter().map(|r| r.sunset.clone()).collect();
    let expected: Vec<_> = (0..7).map(|i| format!("point-{}", i)).collect();
    assert_eq!(labels, expected);
}

#[tokio::test]
async fn batches_cover_every_point_exactly_once() {
    let source = ScriptedSource::default();
    let points = indexed_points(11);

    fetch_all_times(&source, &points, batch(4), &QueryOptions::default()).await;

    // Concatenated batches reproduce the input sequence
    assert_eq!(source.call_order(), (0..11).collect::<Vec<_>>());
}

#[tokio::test]
async fn single_failure_drops_only_that_point() {
    let source = ScriptedSource::failing_at([2]);
    let points = indexed_points(6);

    let records = fetch_all_times(&source, &points, batch(3), &QueryOptions::default()).await;

    assert_eq!(records.len(), 5);
    let labels: Vec<_> = records.iter().map(|r| r.sunset.clone()).collect();
    assert_eq!(labels, ["point-0", "point-1", "point-3", "point-4", "point-5"]);
}

#[tokio::test]
async fn scenario_twelve_points_two_failures() {
    // batch size 5, 12 points, indices 3 and 9 fail: 3 batches (5, 5, 2),
    // 10 records, original relative order preserved
    let source = ScriptedSource::failing_at([3, 9]);
    let points = indexed_points(12);

    let records = fetch_all_times(&source, &points, batch(5), &QueryOptions::default()).await;

    assert_eq!(records.len(), 10);
    let labels: Vec<_> = records.iter().map(|r| r.sunset.clone()).collect();
    let expected: Vec<_> = (0..12)
        .filter(|i| *i != 3 && *i != 9)
        .map(|i| format!("point-{}", i))
        .collect();
    assert_eq!(labels, expected);
    assert_eq!(source.call_order(), (0..12).collect::<Vec<_>>());
}

#[tokio::test]
async fn empty_input_issues_no_requests() {
    let source = ScriptedSource::default();

    let records = fetch_all_times(&source, &[], batch(5), &QueryOptions::default()).await;

    assert!(records.is_empty());
    assert!(source.call_order().is_empty());
}

#[tokio::test]
async fn all_failures_yield_empty_result_not_error() {
    let source = ScriptedSource::failing_at(0..4);
    let points = indexed_points(4);

    let records = fetch_all_times(&source, &points, batch(2), &QueryOptions::default()).await;

    assert!(records.is_empty());
    assert_eq!(source.call_order().len(), 4);
}

#[tokio::test]
async fn in_flight_requests_never_exceed_batch_size() {
    let source = ScriptedSource::default();
    let points = indexed_points(12);

    fetch_all_times(&source, &points, batch(5), &QueryOptions::default()).await;

    // Full batches fan out completely, and no request from a later batch
    // starts before the previous batch settles
    assert_eq!(source.max_in_flight(), 5);
}

#[tokio::test]
async fn short_input_fans_out_in_a_single_batch() {
    let source = ScriptedSource::default();
    let points = indexed_points(3);

    let records = fetch_all_times(&source, &points, batch(10), &QueryOptions::default()).await;

    assert_eq!(records.len(), 3);
    assert_eq!(source.max_in_flight(), 3);
}
