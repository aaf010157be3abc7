//! Render sink: the display slots the dispatcher and loaders write into.
//!
//! [`RenderSink`] is the seam between state changes and what is shown.
//! [`DashboardSlots`] is the implementation the TUI renders from.

use sensordash_core::{
    motion_status, smoke_status, ConnectionState, HistoricalSeries, Metric,
    ReadingRow, ReadingsTable, SecurityEventList, TimestampedPoint, MISSING_VALUE,
};

/// Display slots written by the dispatcher, connection manager and loaders.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSink {
    /// Connection status badge.
    fn show_connection(&mut self, state: ConnectionState);

    /// Current temperature, already formatted to one decimal.
    fn show_temperature(&mut self, text: String);

    /// Current humidity, already formatted to one decimal.
    fn show_humidity(&mut self, text: String);

    /// Motion card active flag.
    fn show_motion(&mut self, active: bool);

    /// Smoke card active flag.
    fn show_smoke(&mut self, active: bool);

    /// Insert a row at the top of the readings table.
    fn push_table_row(&mut self, row: ReadingRow);

    /// Redraw one live chart from its series, oldest point first.
    fn redraw_live_chart(&mut self, metric: Metric, points: &[TimestampedPoint]);

    /// Replace both historical charts.
    fn replace_history(&mut self, series: HistoricalSeries);

    /// Replace both security event lists.
    fn replace_security_events(&mut self, events: SecurityEventList);
}

/// State of the motion or smoke card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indicator {
    /// No reading has carried this flag yet
    #[default]
    Unknown,
    Clear,
    Active,
}

impl Indicator {
    pub fn from_flag(active: bool) -> Self {
        if active {
            Indicator::Active
        } else {
            Indicator::Clear
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Indicator::Active)
    }
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, Default)]
pub struct DashboardSlots {
    pub connection: ConnectionState,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub motion: Indicator,
    pub smoke: Indicator,
    pub table: ReadingsTable,
    pub live_temperature: Vec<TimestampedPoint>,
    pub live_humidity: Vec<TimestampedPoint>,
    pub history: Option<HistoricalSeries>,
    pub security: Option<SecurityEventList>,
}

impl DashboardSlots {
    /// Live chart contents for `metric`.
    pub fn live_chart(&self, metric: Metric) -> &[TimestampedPoint] {
        match metric {
            Metric::Temperature => &self.live_temperature,
            Metric::Humidity => &self.live_humidity,
        }
    }

    /// Value card text for `metric`, or the placeholder.
    pub fn value_text(&self, metric: Metric) -> &str {
        let slot = match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
        };
        slot.as_deref().unwrap_or(MISSING_VALUE)
    }

    pub fn motion_text(&self) -> &'static str {
        match self.motion {
            Indicator::Unknown => MISSING_VALUE,
            other => motion_status(other.is_active()),
        }
    }

    pub fn smoke_text(&self) -> &'static str {
        match self.smoke {
            Indicator::Unknown => MISSING_VALUE,
            other => smoke_status(other.is_active()),
        }
    }
}

impl RenderSink for DashboardSlots {
    fn show_connection(&mut self, state: ConnectionState) {
        self.connection = state;
    }

    fn show_temperature(&mut self, text: String) {
        self.temperature = Some(text);
    }

    fn show_humidity(&mut self, text: String) {
        self.humidity = Some(text);
    }

    fn show_motion(&mut self, active: bool) {
        self.motion = Indicator::from_flag(active);
    }

    fn show_smoke(&mut self, active: bool) {
        self.smoke = Indicator::from_flag(active);
    }

    fn push_table_row(&mut self, row: ReadingRow) {
        self.table.push(row);
    }

    fn redraw_live_chart(&mut self, metric: Metric, points: &[TimestampedPoint]) {
        let chart = match metric {
            Metric::Temperature => &mut self.live_temperature,
            Metric::Humidity => &mut self.live_humidity,
        };
        chart.clear();
        chart.extend_from_slice(points);
    }

    fn replace_history(&mut self, series: HistoricalSeries) {
        self.history = Some(series);
    }

    fn replace_security_events(&mut self, events: SecurityEventList) {
        self.security = Some(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_slots_start_empty() {
        let slots = DashboardSlots::default();
        assert_eq!(slots.connection, ConnectionState::Disconnected);
        assert_eq!(slots.value_text(Metric::Temperature), "--");
        assert_eq!(slots.motion_text(), "--");
        assert!(slots.table.is_empty());
        assert!(slots.live_chart(Metric::Humidity).is_empty());
        assert!(slots.history.is_none());
    }

    #[test]
    fn test_indicator_texts() {
        let mut slots = DashboardSlots::default();
        slots.show_motion(true);
        slots.show_smoke(false);
        assert_eq!(slots.motion_text(), "Motion Detected");
        assert_eq!(slots.smoke_text(), "No Smoke");
        assert!(slots.motion.is_active());
    }

    #[test]
    fn test_redraw_replaces_chart_contents() {
        let mut slots = DashboardSlots::default();
        let at = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        slots.redraw_live_chart(Metric::Temperature, &[TimestampedPoint::new(at, 1.0)]);
        slots.redraw_live_chart(
            Metric::Temperature,
            &[
                TimestampedPoint::new(at, 1.0),
                TimestampedPoint::new(at, 2.0),
            ],
        );
        assert_eq!(slots.live_chart(Metric::Temperature).len(), 2);
        assert!(slots.live_chart(Metric::Humidity).is_empty());
    }
}
