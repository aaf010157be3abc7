//! One-line range selector with load status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sensordash_app::{LoadStatus, RangeLoader};

use crate::theme::styles;

/// Short label for a range: whole days of two or more as `Nd`, else `Nh`.
pub fn range_label(hours: u32) -> String {
    if hours >= 48 && hours % 24 == 0 {
        format!("{}d", hours / 24)
    } else {
        format!("{hours}h")
    }
}

/// Range bar widget: title, available ranges and the loader status
pub struct RangeBar<'a> {
    title: &'static str,
    loader: &'a RangeLoader,
    keys: &'static str,
}

impl<'a> RangeBar<'a> {
    pub fn new(title: &'static str, loader: &'a RangeLoader, keys: &'static str) -> Self {
        Self {
            title,
            loader,
            keys,
        }
    }

    fn status_span(&self) -> Option<Span<'static>> {
        match self.loader.status() {
            LoadStatus::Idle => None,
            LoadStatus::Loading { hours } => Some(Span::styled(
                format!("Loading {}…", range_label(*hours)),
                styles::status_yellow(),
            )),
            LoadStatus::Loaded { hours } => Some(Span::styled(
                format!("Loaded {}", range_label(*hours)),
                styles::status_green(),
            )),
            LoadStatus::Failed { hours, error } => Some(Span::styled(
                format!("Failed to load {}: {}", range_label(*hours), error),
                styles::status_red(),
            )),
        }
    }

    pub fn line(&self) -> Line<'static> {
        let selected = self.loader.selected_hours();
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.title),
                styles::accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{} ", self.keys), styles::keybinding()),
        ];

        for hours in self.loader.selector.options() {
            let style = if *hours == selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", range_label(*hours)), style));
        }

        if let Some(status) = self.status_span() {
            spans.push(Span::raw("  "));
            spans.push(status);
        }

        Line::from(spans)
    }
}

impl Widget for RangeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
