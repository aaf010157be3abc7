//! Configuration types for Sensor Dash

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Hour ranges offered by both range selectors unless configured.
pub const DEFAULT_RANGES: [u32; 4] = [1, 6, 24, 168];

/// Initially selected range.
pub const DEFAULT_RANGE_HOURS: u32 = 24;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub feed: FeedSettings,

    #[serde(default)]
    pub history: RangeSettings,

    #[serde(default)]
    pub security: RangeSettings,
}

/// Sensor server location
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Origin the push channel and API are derived from
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Timeout for one range request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_origin() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Push channel behaviour
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Fixed delay before reconnecting after a closure, in seconds
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            reconnect_delay_secs: default_reconnect_delay_secs(),
        }
    }
}

impl FeedSettings {
    /// Reconnect delay, never shorter than one second.
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs.max(1))
    }
}

fn default_reconnect_delay_secs() -> u64 {
    5
}

/// Selectable hour ranges for one range loader
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RangeSettings {
    #[serde(default = "default_ranges")]
    pub ranges: Vec<u32>,

    #[serde(default = "default_hours")]
    pub default_hours: u32,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            ranges: default_ranges(),
            default_hours: default_hours(),
        }
    }
}

impl RangeSettings {
    /// Sorted, deduplicated, non-zero ranges that contain `default_hours`.
    ///
    /// An empty (or all-zero) list falls back to [`DEFAULT_RANGES`]; a zero
    /// default falls back to [`DEFAULT_RANGE_HOURS`].
    pub fn normalized(&self) -> Self {
        let mut ranges: Vec<u32> = self.ranges.iter().copied().filter(|h| *h > 0).collect();
        if ranges.is_empty() {
            ranges = default_ranges();
        }

        let default_hours = if self.default_hours == 0 {
            DEFAULT_RANGE_HOURS
        } else {
            self.default_hours
        };
        ranges.push(default_hours);
        ranges.sort_unstable();
        ranges.dedup();

        Self {
            ranges,
            default_hours,
        }
    }
}

fn default_ranges() -> Vec<u32> {
    DEFAULT_RANGES.to_vec()
}

fn default_hours() -> u32 {
    DEFAULT_RANGE_HOURS
}
