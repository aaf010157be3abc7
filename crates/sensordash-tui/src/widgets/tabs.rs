//! Tab strip for switching between the Live and History pages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sensordash_app::ActiveTab;

use crate::theme::styles;

const TABS: [ActiveTab; 2] = [ActiveTab::Live, ActiveTab::History];

/// Widget rendering the tab pills, selected one highlighted
pub struct DashboardTabs {
    active: ActiveTab,
}

impl DashboardTabs {
    pub fn new(active: ActiveTab) -> Self {
        Self { active }
    }

    /// Tab pills as one line
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(TABS.len() * 2);
        for (i, tab) in TABS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if *tab == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
        }
        Line::from(spans)
    }
}

impl Widget for DashboardTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
