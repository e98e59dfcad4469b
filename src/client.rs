//! Sunrise-sunset API client.
//!
//! The fetch pipeline talks to the API through the [`SunTimesSource`] trait
//! so tests can substitute an in-memory implementation. The production
//! implementation, [`SunriseSunsetClient`], wraps an injected
//! [`reqwest::Client`] and therefore shares whatever connection pool the
//! caller configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::api::{SunTimes, SunTimesResponse};
use crate::models::GeoPoint;

/// Request timeout applied by [`SunriseSunsetClient::with_default_client`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors surfaced by a single sun-times lookup.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: connection, timeout, a non-2xx HTTP status,
    /// or an undecodable response body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP exchange succeeded but the API flagged the request as
    /// unsuccessful.
    #[error("API returned status '{status}'")]
    Api { status: String },
}

/// Optional request parameters understood by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Date to compute times for: `YYYY-MM-DD` or the literal `today`
    pub date: Option<String>,
    /// When set, ask for 12-hour (`true`) or 24-hour (`false`) time strings
    pub formatted: Option<bool>,
    /// JSONP callback name
    pub callback: Option<String>,
}

impl QueryOptions {
    /// Options targeting a specific calendar date.
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date.format("%Y-%m-%d").to_string()),
            ..Self::default()
        }
    }
}

/// Build the request URL for one point.
///
/// `base_url` must not carry a query string; coordinates are rendered with
/// seven decimal places, matching the precision points are generated with.
pub fn request_url(base_url: &str, point: &GeoPoint, options: &QueryOptions) -> String {
    let mut url = format!(
        "{}?lat={:.7}&lng={:.7}",
        base_url, point.latitude, point.longitude
    );
    if let Some(date) = &options.date {
        url.push_str(&format!("&date={}", date));
    }
    if let Some(formatted) = options.formatted {
        url.push_str(&format!("&formatted={}", u8::from(formatted)));
    }
    if let Some(callback) = &options.callback {
        url.push_str(&format!("&callback={}", callback));
    }
    url
}

/// A source of sun times for geographic points.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SunTimesSource: Send + Sync {
    /// Fetch the sun times for one point.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the lookup fails for any reason; the
    /// caller decides whether that is fatal.
    async fn sun_times(
        &self,
        point: &GeoPoint,
        options: &QueryOptions,
    ) -> Result<SunTimes, FetchError>;
}

/// HTTP-backed [`SunTimesSource`] for the sunrise-sunset API.
#[derive(Debug, Clone)]
pub struct SunriseSunsetClient {
    client: Client,
    base_url: String,
}

impl SunriseSunsetClient {
    /// Wrap an already-configured HTTP client.
    ///
    /// The client is injected so the caller controls pooling and timeouts;
    /// reqwest reuses persistent connections across requests by default.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a client with keep-alive pooling and a 60-second request
    /// timeout.
    pub fn with_default_client(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::new(client, base_url))
    }
}

#[async_trait]
impl SunTimesSource for SunriseSunsetClient {
    async fn sun_times(
        &self,
        point: &GeoPoint,
        options: &QueryOptions,
    ) -> Result<SunTimes, FetchError> {
        let url = request_url(&self.base_url, point, options);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let envelope: SunTimesResponse = response.json().await?;
        if envelope.status != "OK" {
            return Err(FetchError::Api {
                status: envelope.status,
            });
        }
        Ok(envelope.results)
    }
}
