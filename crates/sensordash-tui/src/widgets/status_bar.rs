//! Status bar widget
//!
//! Key hints for the active tab.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sensordash_app::ActiveTab;

use crate::theme::styles;

/// Bottom line with the keys that apply to the active tab
pub struct StatusBar {
    active_tab: ActiveTab,
}

impl StatusBar {
    pub fn new(active_tab: ActiveTab) -> Self {
        Self { active_tab }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.active_tab {
            ActiveTab::Live => &[("q", "Quit"), ("Tab", "History")],
            ActiveTab::History => &[
                ("q", "Quit"),
                ("Tab", "Live"),
                ("[ ]", "Range"),
                ("r", "Reload"),
                ("{ }", "Events range"),
                ("e", "Reload events"),
            ],
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
            spans.push(Span::raw("   "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_live_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(ActiveTab::Live), term.area());
        assert!(term.buffer_contains("q Quit"));
        assert!(term.buffer_contains("Tab History"));
        assert!(!term.buffer_contains("Reload"));
    }

    #[test]
    fn test_history_hints_include_range_keys() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(ActiveTab::History), term.area());
        assert!(term.buffer_contains("[ ] Range"));
        assert!(term.buffer_contains("e Reload events"));
    }
}
