//! Server-queried ranges: historical series and security events.
//!
//! Both are replaced wholesale on every successful load and never merged with
//! live data.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::{Error, Result};
use crate::reading::TimestampedPoint;

/// Historical temperature and humidity series for one queried range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    /// Hours covered by the query that produced this series.
    pub hours: u32,
    pub temperature: Vec<TimestampedPoint>,
    pub humidity: Vec<TimestampedPoint>,
}

impl HistoricalSeries {
    /// Build series from index-aligned arrays.
    ///
    /// Alignment is the server's contract and is not checked: iteration stops
    /// at the shortest array. `None` values (sensor did not report) are skipped.
    /// Fails if any consumed timestamp cannot be parsed.
    pub fn from_aligned(
        hours: u32,
        timestamps: &[String],
        temperature: &[Option<f64>],
        humidity: &[Option<f64>],
    ) -> Result<Self> {
        let mut series = Self {
            hours,
            ..Default::default()
        };

        for ((raw, temp), hum) in timestamps.iter().zip(temperature).zip(humidity) {
            let timestamp = parse_timestamp(raw)?;
            if let Some(v) = temp {
                series.temperature.push(TimestampedPoint::new(timestamp, *v));
            }
            if let Some(v) = hum {
                series.humidity.push(TimestampedPoint::new(timestamp, *v));
            }
        }

        Ok(series)
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.humidity.is_empty()
    }
}

/// Which sensor raised a security event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityEventKind {
    Motion,
    Smoke,
}

impl SecurityEventKind {
    /// Fixed type label rendered with every event.
    pub fn label(&self) -> &'static str {
        match self {
            SecurityEventKind::Motion => "Motion Detected",
            SecurityEventKind::Smoke => "Smoke Detected",
        }
    }
}

/// One motion or smoke event.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityEvent {
    pub timestamp: DateTime<Local>,
    pub location: String,
}

impl SecurityEvent {
    /// Local date-time as displayed in the event lists.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Motion and smoke events for one queried range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityEventList {
    pub hours: u32,
    pub motion: Vec<SecurityEvent>,
    pub smoke: Vec<SecurityEvent>,
}

impl SecurityEventList {
    pub fn events(&self, kind: SecurityEventKind) -> &[SecurityEvent] {
        match kind {
            SecurityEventKind::Motion => &self.motion,
            SecurityEventKind::Smoke => &self.smoke,
        }
    }
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00+00:00`, `...Z`) and naive ISO-8601
/// without an offset, which is taken as local time.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
                return Ok(dt);
            }
        }
    }

    Err(Error::decode(format!("unrecognised timestamp '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stamps(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_timestamp("2024-05-01T12:00:00+00:00").unwrap();
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_zulu_with_fraction() {
        let dt = parse_timestamp("2024-05-01T12:00:00.123456Z").unwrap();
        assert_eq!(dt.with_timezone(&Utc).timestamp(), 1_714_564_800);
    }

    #[test]
    fn test_parse_naive_is_local() {
        let dt = parse_timestamp("2024-05-01T08:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "08:30");

        let dt = parse_timestamp("2024-05-01 08:30:00.5").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "08:30:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_from_aligned_builds_both_series() {
        let series = HistoricalSeries::from_aligned(
            6,
            &stamps(&["2024-05-01T10:00:00Z", "2024-05-01T11:00:00Z"]),
            &[Some(20.0), Some(21.0)],
            &[Some(50.0), Some(51.0)],
        )
        .unwrap();

        assert_eq!(series.hours, 6);
        assert_eq!(series.temperature.len(), 2);
        assert_eq!(series.humidity.len(), 2);
        assert_eq!(series.temperature[1].value, 21.0);
        assert_eq!(series.temperature[0].timestamp, series.humidity[0].timestamp);
    }

    #[test]
    fn test_from_aligned_skips_nulls() {
        let series = HistoricalSeries::from_aligned(
            1,
            &stamps(&["2024-05-01T10:00:00Z", "2024-05-01T11:00:00Z"]),
            &[None, Some(21.0)],
            &[Some(50.0), None],
        )
        .unwrap();

        assert_eq!(series.temperature.len(), 1);
        assert_eq!(series.humidity.len(), 1);
        assert_eq!(series.temperature[0].value, 21.0);
    }

    #[test]
    fn test_from_aligned_stops_at_shortest() {
        let series = HistoricalSeries::from_aligned(
            1,
            &stamps(&["2024-05-01T10:00:00Z", "2024-05-01T11:00:00Z", "2024-05-01T12:00:00Z"]),
            &[Some(1.0), Some(2.0)],
            &[Some(3.0), Some(4.0), Some(5.0)],
        )
        .unwrap();

        assert_eq!(series.temperature.len(), 2);
        assert_eq!(series.humidity.len(), 2);
    }

    #[test]
    fn test_from_aligned_rejects_bad_timestamp() {
        let result = HistoricalSeries::from_aligned(
            1,
            &stamps(&["not-a-time"]),
            &[Some(1.0)],
            &[Some(2.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_series() {
        let series = HistoricalSeries::from_aligned(24, &[], &[], &[]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_security_event_labels() {
        assert_eq!(SecurityEventKind::Motion.label(), "Motion Detected");
        assert_eq!(SecurityEventKind::Smoke.label(), "Smoke Detected");
    }

    #[test]
    fn test_security_event_list_by_kind() {
        let event = SecurityEvent {
            timestamp: parse_timestamp("2024-05-01T10:00:00").unwrap(),
            location: "Hallway".into(),
        };
        let list = SecurityEventList {
            hours: 24,
            motion: vec![event.clone()],
            smoke: vec![],
        };
        assert_eq!(list.events(SecurityEventKind::Motion), &[event.clone()]);
        assert!(list.events(SecurityEventKind::Smoke).is_empty());
        assert_eq!(event.display_time(), "2024-05-01 10:00:00");
    }
}
