//! # First Light
//!
//! Earliest-sunrise scanner for randomly sampled geographic points.
//!
//! This crate samples random (latitude, longitude) points across the globe,
//! fetches sunrise/sunset/twilight times for each of them from the
//! sunrise-sunset HTTP API, and reduces the responses down to the single
//! point with the earliest sunrise. Requests are issued in fixed-size
//! batches: all requests inside a batch run concurrently, batches run
//! strictly one after another, which bounds the number of requests in
//! flight.
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - [`api`]: Data Transfer Objects for the API payload
//! - [`client`]: the `SunTimesSource` trait, the reqwest-backed client, and
//!   request URL building
//! - [`config`]: environment-driven configuration, validated once at startup
//! - [`models`]: geographic point types and time-of-day normalization
//! - [`services`]: point generation, the batch fetcher, and the
//!   earliest-sunrise reduction
//!
//! The `first-light` binary (`src/bin/scan.rs`) wires these together into a
//! single scan run.

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod services;
