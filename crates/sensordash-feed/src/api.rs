//! Range queries against the sensor server's HTTP API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use sensordash_core::prelude::*;
use sensordash_core::{parse_timestamp, HistoricalSeries, SecurityEvent, SecurityEventList};

use crate::endpoint::Endpoints;

/// Default timeout for one range request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads server-side ranges for the history and security panels.
#[trait_variant::make(RangeApi: Send)]
pub trait LocalRangeApi {
    /// Temperature and humidity over the last `hours`.
    async fn historical(&self, hours: u32) -> Result<HistoricalSeries>;

    /// Motion and smoke events over the last `hours`.
    async fn security_events(&self, hours: u32) -> Result<SecurityEventList>;
}

// ─────────────────────────────────────────────────────────────────
// Wire formats
// ─────────────────────────────────────────────────────────────────

/// Body of `GET /api/historical-data/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalDataResponse {
    pub timestamps: Vec<String>,
    pub temperature: Vec<Option<f64>>,
    pub humidity: Vec<Option<f64>>,
}

impl HistoricalDataResponse {
    pub fn into_series(self, hours: u32) -> Result<HistoricalSeries> {
        HistoricalSeries::from_aligned(hours, &self.timestamps, &self.temperature, &self.humidity)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSecurityEvent {
    pub timestamp: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Body of `GET /api/security-events/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityEventsResponse {
    pub motion_events: Vec<WireSecurityEvent>,
    pub smoke_events: Vec<WireSecurityEvent>,
}

impl SecurityEventsResponse {
    pub fn into_list(self, hours: u32) -> Result<SecurityEventList> {
        Ok(SecurityEventList {
            hours,
            motion: convert_events(self.motion_events)?,
            smoke: convert_events(self.smoke_events)?,
        })
    }
}

fn convert_events(events: Vec<WireSecurityEvent>) -> Result<Vec<SecurityEvent>> {
    events
        .into_iter()
        .map(|event| {
            Ok(SecurityEvent {
                timestamp: parse_timestamp(&event.timestamp)?,
                location: event.location.unwrap_or_else(|| "Unknown".to_string()),
            })
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// HTTP implementation
// ─────────────────────────────────────────────────────────────────

/// [`RangeApi`] over HTTP using a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpRangeApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpRangeApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let endpoint = url.path().to_string();
        debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::api(format!("{endpoint}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::api_status(endpoint, status.as_u16()));
        }

        resp.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                Error::decode(format!("{endpoint}: {e}"))
            } else {
                Error::api(format!("{endpoint}: {e}"))
            }
        })
    }
}

impl RangeApi for HttpRangeApi {
    async fn historical(&self, hours: u32) -> Result<HistoricalSeries> {
        let body: HistoricalDataResponse =
            self.get_json(self.endpoints.historical_url(hours)).await?;
        body.into_series(hours)
    }

    async fn security_events(&self, hours: u32) -> Result<SecurityEventList> {
        let body: SecurityEventsResponse = self
            .get_json(self.endpoints.security_events_url(hours))
            .await?;
        body.into_list(hours)
    }
}
