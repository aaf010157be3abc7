//! Value cards: current temperature, humidity, motion and smoke.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sensordash_app::{DashboardSlots, Indicator};
use sensordash_core::{Metric, MISSING_VALUE};

use crate::theme::styles;

/// One bordered card with a title and a large value line
pub struct ValueCard {
    title: &'static str,
    value: String,
    style: Style,
    alert: bool,
}

impl ValueCard {
    /// Card for a numeric metric; the unit is only shown next to a value.
    pub fn metric(slots: &DashboardSlots, metric: Metric) -> Self {
        let text = slots.value_text(metric);
        let value = if text == MISSING_VALUE {
            text.to_string()
        } else {
            format!("{} {}", text, metric.unit())
        };
        let title = match metric {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
        };

        Self {
            title,
            value,
            style: styles::series(metric).add_modifier(Modifier::BOLD),
            alert: false,
        }
    }

    pub fn motion(slots: &DashboardSlots) -> Self {
        Self::indicator("Motion", slots.motion_text(), slots.motion)
    }

    pub fn smoke(slots: &DashboardSlots) -> Self {
        Self::indicator("Smoke", slots.smoke_text(), slots.smoke)
    }

    fn indicator(title: &'static str, text: &str, indicator: Indicator) -> Self {
        let style = match indicator {
            Indicator::Unknown => styles::text_muted(),
            Indicator::Clear => styles::status_green(),
            Indicator::Active => styles::status_red().add_modifier(Modifier::BOLD),
        };
        Self {
            title,
            value: text.to_string(),
            style,
            alert: indicator.is_active(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_alert(&self) -> bool {
        self.alert
    }
}

impl Widget for ValueCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.alert)
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                styles::text_secondary(),
            )));

        Paragraph::new(Line::from(Span::styled(self.value, self.style)))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sensordash_app::RenderSink;

    #[test]
    fn test_metric_card_placeholder_before_first_reading() {
        let slots = DashboardSlots::default();
        let card = ValueCard::metric(&slots, Metric::Temperature);
        assert_eq!(card.value(), "--");
    }

    #[test]
    fn test_metric_card_shows_unit() {
        let mut slots = DashboardSlots::default();
        slots.show_humidity("55.2".into());

        let card = ValueCard::metric(&slots, Metric::Humidity);
        assert_eq!(card.value(), "55.2 %");

        let mut term = TestTerminal::with_size(24, 4);
        term.render_widget(card, term.area());
        assert!(term.buffer_contains("Humidity"));
        assert!(term.buffer_contains("55.2 %"));
    }

    #[test]
    fn test_motion_card_states() {
        let mut slots = DashboardSlots::default();
        assert_eq!(ValueCard::motion(&slots).value(), "--");

        slots.show_motion(false);
        let card = ValueCard::motion(&slots);
        assert_eq!(card.value(), "No Motion");
        assert!(!card.is_alert());

        slots.show_motion(true);
        let card = ValueCard::motion(&slots);
        assert_eq!(card.value(), "Motion Detected");
        assert!(card.is_alert());
    }

    #[test]
    fn test_smoke_card_renders_status() {
        let mut slots = DashboardSlots::default();
        slots.show_smoke(true);

        let mut term = TestTerminal::with_size(24, 4);
        term.render_widget(ValueCard::smoke(&slots), term.area());
        assert!(term.buffer_contains("Smoke Detected"));
    }
}
