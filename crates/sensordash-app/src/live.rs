//! Rolling live series feeding the two live charts.

use sensordash_core::{Metric, SeriesBuffer, TimestampedPoint};

use crate::sink::RenderSink;

/// One 60-point sliding window per live metric.
#[derive(Debug, Clone)]
pub struct LiveSeries {
    temperature: SeriesBuffer,
    humidity: SeriesBuffer,
}

impl Default for LiveSeries {
    fn default() -> Self {
        Self {
            temperature: SeriesBuffer::live(),
            humidity: SeriesBuffer::live(),
        }
    }
}

impl LiveSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, metric: Metric) -> &SeriesBuffer {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
        }
    }

    /// Append a point and redraw that metric's chart with the whole window.
    pub fn append<S>(&mut self, metric: Metric, point: TimestampedPoint, sink: &mut S)
    where
        S: RenderSink + ?Sized,
    {
        let series = match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
        };
        series.push(point);
        sink.redraw_live_chart(metric, &series.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DashboardSlots, MockRenderSink};
    use chrono::{Local, TimeZone};
    use sensordash_core::LIVE_SERIES_CAPACITY;

    fn point(secs: i64, value: f64) -> TimestampedPoint {
        TimestampedPoint::new(Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap(), value)
    }

    #[test]
    fn test_append_redraws_only_that_chart() {
        let mut live = LiveSeries::new();
        let mut sink = MockRenderSink::new();
        sink.expect_redraw_live_chart()
            .withf(|metric, points| *metric == Metric::Humidity && points.len() == 1)
            .times(1)
            .return_const(());

        live.append(Metric::Humidity, point(0, 40.0), &mut sink);
        assert_eq!(live.series(Metric::Humidity).len(), 1);
        assert!(live.series(Metric::Temperature).is_empty());
    }

    #[test]
    fn test_chart_tracks_sliding_window() {
        let mut live = LiveSeries::new();
        let mut slots = DashboardSlots::default();

        for i in 0..75 {
            live.append(Metric::Temperature, point(i, i as f64), &mut slots);
        }

        let chart = slots.live_chart(Metric::Temperature);
        assert_eq!(chart.len(), LIVE_SERIES_CAPACITY);
        assert_eq!(chart.first().map(|p| p.value), Some(15.0));
        assert_eq!(chart.last().map(|p| p.value), Some(74.0));
    }
}
