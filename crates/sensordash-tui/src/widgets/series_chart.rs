//! Line chart for one metric, live or historical.
//!
//! X is seconds since the oldest point; the axis is labelled with the first
//! and last timestamps instead.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use sensordash_core::{format_value, Metric, TimestampedPoint};

use crate::theme::styles;

const LIVE_TIME_FORMAT: &str = "%H:%M:%S";
const HISTORY_TIME_FORMAT: &str = "%m-%d %H:%M";

/// Chart widget over a slice of timestamped points
pub struct SeriesChart<'a> {
    title: String,
    points: &'a [TimestampedPoint],
    style: Style,
    time_format: &'static str,
    empty_text: &'static str,
}

impl<'a> SeriesChart<'a> {
    /// Rolling chart fed by the push channel
    pub fn live(metric: Metric, points: &'a [TimestampedPoint]) -> Self {
        Self {
            title: format!(" {} ", metric.label()),
            points,
            style: styles::series(metric),
            time_format: LIVE_TIME_FORMAT,
            empty_text: "Waiting for readings…",
        }
    }

    /// Chart of a server-queried range
    pub fn historical(metric: Metric, hours: u32, points: &'a [TimestampedPoint]) -> Self {
        Self {
            title: format!(" {} · {} ", metric.label(), super::range_label(hours)),
            points,
            style: styles::series(metric),
            time_format: HISTORY_TIME_FORMAT,
            empty_text: "No data for this range",
        }
    }

    /// Chart with nothing loaded yet
    pub fn pending(metric: Metric) -> SeriesChart<'static> {
        SeriesChart {
            title: format!(" {} ", metric.label()),
            points: &[],
            style: styles::series(metric),
            time_format: HISTORY_TIME_FORMAT,
            empty_text: "Loading…",
        }
    }
}

/// Convert points to chart coordinates: seconds since the first point, value.
pub(crate) fn plot_points(points: &[TimestampedPoint]) -> Vec<(f64, f64)> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| {
            let secs = (p.timestamp - first.timestamp).num_milliseconds() as f64 / 1000.0;
            (secs, p.value)
        })
        .collect()
}

/// Y bounds with a little headroom; a flat series gets ±1.
pub(crate) fn value_bounds(points: &[TimestampedPoint]) -> [f64; 2] {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if (max - min).abs() < f64::EPSILON {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}

impl Widget for SeriesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(Span::styled(
            self.title,
            styles::text_secondary(),
        )));

        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            Paragraph::new(Line::from(Span::styled(self.empty_text, styles::text_muted())))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        };

        let data = plot_points(self.points);
        let x_max = data.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
        let [y_min, y_max] = value_bounds(self.points);

        let x_labels = vec![
            first.timestamp.format(self.time_format).to_string(),
            last.timestamp.format(self.time_format).to_string(),
        ];
        let y_labels = vec![
            format_value(y_min),
            format_value((y_min + y_max) / 2.0),
            format_value(y_max),
        ];

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.style)
            .data(&data);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(styles::text_muted())
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(styles::text_muted())
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{points, TestTerminal};

    #[test]
    fn test_plot_points_relative_seconds() {
        let pts = points(&[20.0, 21.0, 22.0]);
        assert_eq!(plot_points(&pts), vec![(0.0, 20.0), (1.0, 21.0), (2.0, 22.0)]);
        assert!(plot_points(&[]).is_empty());
    }

    #[test]
    fn test_value_bounds_pad_range() {
        let pts = points(&[10.0, 20.0]);
        assert_eq!(value_bounds(&pts), [9.5, 20.5]);
    }

    #[test]
    fn test_value_bounds_flat_series() {
        let pts = points(&[42.0, 42.0]);
        assert_eq!(value_bounds(&pts), [41.0, 43.0]);
    }

    #[test]
    fn test_value_bounds_empty() {
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
    }

    #[test]
    fn test_empty_live_chart_shows_waiting() {
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(SeriesChart::live(Metric::Temperature, &[]), term.area());
        assert!(term.buffer_contains("Temperature (°C)"));
        assert!(term.buffer_contains("Waiting for readings"));
    }

    #[test]
    fn test_chart_with_points_renders_title() {
        let pts = points(&[20.0, 21.5, 21.0, 22.0]);
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(SeriesChart::live(Metric::Humidity, &pts), term.area());
        assert!(term.buffer_contains("Humidity (%)"));
        assert!(!term.buffer_contains("Waiting for readings"));
    }

    #[test]
    fn test_single_point_chart_renders() {
        let pts = points(&[5.0]);
        let mut term = TestTerminal::with_size(40, 10);
        term.render_widget(SeriesChart::live(Metric::Temperature, &pts), term.area());
        assert!(term.buffer_contains("Temperature"));
    }

    #[test]
    fn test_historical_title_names_range() {
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(SeriesChart::historical(Metric::Temperature, 168, &[]), term.area());
        assert!(term.buffer_contains("7d"));
        assert!(term.buffer_contains("No data for this range"));
    }
}
