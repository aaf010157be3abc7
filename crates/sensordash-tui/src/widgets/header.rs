//! Header bar widget
//!
//! Title, server origin, page tabs and the connection badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use sensordash_app::ActiveTab;
use sensordash_core::ConnectionState;

use crate::theme::{palette, styles};

use super::{truncate_to_width, DashboardTabs};

/// Main header showing the app title, server origin, tabs and connection
pub struct MainHeader<'a> {
    origin: &'a str,
    connection: ConnectionState,
    active_tab: ActiveTab,
}

impl<'a> MainHeader<'a> {
    pub fn new(origin: &'a str, connection: ConnectionState, active_tab: ActiveTab) -> Self {
        Self {
            origin,
            connection,
            active_tab,
        }
    }

    fn badge(&self) -> Line<'static> {
        let (icon, label, style) = styles::connection_indicator(self.connection);
        Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };

        // Right side first: tabs and badge always win over the origin
        let tabs = DashboardTabs::new(self.active_tab).line();
        let badge = self.badge();
        let right_width = (tabs.width() + 2 + badge.width()) as u16;

        let mut right_spans = tabs.spans;
        right_spans.push(Span::raw("  "));
        right_spans.extend(badge.spans);
        let right = Line::from(right_spans);

        let right_x = row.x + row.width.saturating_sub(right_width);
        buf.set_line(right_x, row.y, &right, row.width.min(right_width));

        let title = "Sensor Dash";
        let mut left = vec![
            Span::raw(" "),
            Span::styled(title, styles::accent_bold()),
        ];

        // title, separator and a gap before the right section
        let used = 1 + title.len() + 3 + 2;
        let room = (right_x.saturating_sub(row.x) as usize).saturating_sub(used);
        if room > 3 {
            left.push(Span::styled(" / ", styles::text_muted()));
            left.push(Span::styled(
                truncate_to_width(self.origin, room),
                styles::text_secondary(),
            ));
        }

        let left_width = right_x.saturating_sub(row.x);
        buf.set_line(row.x, row.y, &Line::from(left), left_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_origin_and_badge() {
        let mut term = TestTerminal::with_size(100, 3);
        let header = MainHeader::new(
            "http://sensors.local:8000",
            ConnectionState::Connected,
            ActiveTab::Live,
        );
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Sensor Dash"));
        assert!(term.buffer_contains("http://sensors.local:8000"));
        assert!(term.buffer_contains("● Connected"));
        assert!(term.buffer_contains("History"));
    }

    #[test]
    fn test_header_badge_follows_connection_state() {
        for (state, text) in [
            (ConnectionState::Disconnected, "○ Disconnected"),
            (ConnectionState::Connecting, "◐ Connecting"),
        ] {
            let mut term = TestTerminal::with_size(100, 3);
            term.render_widget(
                MainHeader::new("http://x", state, ActiveTab::Live),
                term.area(),
            );
            assert!(term.buffer_contains(text), "missing badge for {state}");
        }
    }

    #[test]
    fn test_narrow_header_keeps_badge_and_drops_origin() {
        let mut term = TestTerminal::with_size(50, 3);
        term.render_widget(
            MainHeader::new(
                "http://a-very-long-sensor-hostname.example.com:8000",
                ConnectionState::Connected,
                ActiveTab::Live,
            ),
            term.area(),
        );
        assert!(term.buffer_contains("Connected"));
        assert!(!term.buffer_contains("example.com"));
    }
}
