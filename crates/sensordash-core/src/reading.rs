//! Sensor readings as they arrive on the push feed.
//!
//! A [`SensorUpdate`] is a partial reading: each field is optional and only the
//! fields that are present drive an update. [`ReadingRow`] is the formatted
//! form that lands in the readings table.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer};

/// Placeholder shown where a numeric value is missing.
pub const MISSING_VALUE: &str = "--";

/// One live metric with its own chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Temperature, Metric::Humidity];

    /// Human-readable label including the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature (°C)",
            Metric::Humidity => "Humidity (%)",
        }
    }

    /// Unit suffix appended in table cells.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

/// A single (timestamp, value) sample of a chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestampedPoint {
    pub timestamp: DateTime<Local>,
    pub value: f64,
}

impl TimestampedPoint {
    pub fn new(timestamp: DateTime<Local>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A (possibly partial) reading decoded from the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorUpdate {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub motion_detected: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub smoke_detected: Option<bool>,
}

impl SensorUpdate {
    /// Value of a numeric metric, if this update carries it.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.humidity.is_none()
            && self.motion_detected.is_none()
            && self.smoke_detected.is_none()
    }
}

/// Raw shape of one reading field before it is interpreted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accept a JSON number or a numeric string.
///
/// Anything else (non-numeric text, non-finite values, arrays, objects) is
/// logged and treated as absent so the rest of the frame still applies.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawField>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawField::Number(v)) => Some(v),
        Some(RawField::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(RawField::Bool(_)) | Some(RawField::Other(_)) => None,
    };

    match value {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => {
            tracing::warn!("ignoring non-numeric reading value");
            Ok(None)
        }
    }
}

/// Accept a boolean, a number (non-zero is set) or a `true`/`false`/`1`/`0`
/// string. Anything else is logged and treated as absent.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<RawField>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawField::Bool(b)) => Some(b),
        Some(RawField::Number(n)) if !n.is_nan() => Some(n != 0.0),
        Some(RawField::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Some(_) => None,
    };

    if flag.is_none() {
        tracing::warn!("ignoring non-boolean detector flag");
    }
    Ok(flag)
}

/// Format a reading value to one decimal place.
pub fn format_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Status text shown on the motion card.
pub fn motion_status(active: bool) -> &'static str {
    if active {
        "Motion Detected"
    } else {
        "No Motion"
    }
}

/// Status text shown on the smoke card.
pub fn smoke_status(active: bool) -> &'static str {
    if active {
        "Smoke Detected"
    } else {
        "No Smoke"
    }
}

/// A formatted row of the readings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRow {
    pub time: String,
    pub temperature: String,
    pub humidity: String,
    pub motion: String,
    pub smoke: String,
}

impl ReadingRow {
    /// Format an update received at `at`.
    ///
    /// Missing numeric fields render as [`MISSING_VALUE`]; missing flags
    /// render as `No`.
    pub fn from_update(update: &SensorUpdate, at: DateTime<Local>) -> Self {
        let cell = |metric: Metric| match update.metric(metric) {
            Some(v) => format!("{}{}", format_value(v), metric.unit()),
            None => MISSING_VALUE.to_string(),
        };
        let flag = |v: Option<bool>| if v.unwrap_or(false) { "Yes" } else { "No" }.to_string();

        Self {
            time: at.format("%H:%M:%S").to_string(),
            temperature: cell(Metric::Temperature),
            humidity: cell(Metric::Humidity),
            motion: flag(update.motion_detected),
            smoke: flag(update.smoke_detected),
        }
    }
}
