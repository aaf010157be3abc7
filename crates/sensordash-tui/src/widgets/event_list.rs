//! Security event lists (motion or smoke).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

use sensordash_core::{SecurityEvent, SecurityEventKind};

use crate::theme::styles;

use super::truncate_to_width;

/// Widest location shown before truncation
const LOCATION_WIDTH: usize = 24;

/// List of one kind of security event; `None` until the first load.
pub struct EventList<'a> {
    kind: SecurityEventKind,
    events: Option<&'a [SecurityEvent]>,
}

impl<'a> EventList<'a> {
    pub fn new(kind: SecurityEventKind, events: Option<&'a [SecurityEvent]>) -> Self {
        Self { kind, events }
    }

    fn title(&self) -> String {
        let name = match self.kind {
            SecurityEventKind::Motion => "Motion Events",
            SecurityEventKind::Smoke => "Smoke Events",
        };
        match self.events {
            Some(events) => format!(" {} ({}) ", name, events.len()),
            None => format!(" {} ", name),
        }
    }

    fn item(&self, event: &SecurityEvent) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(event.display_time(), styles::text_muted()),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{:<width$}",
                    truncate_to_width(&event.location, LOCATION_WIDTH),
                    width = LOCATION_WIDTH
                ),
                styles::text_primary(),
            ),
            Span::raw("  "),
            Span::styled(self.kind.label(), styles::status_red()),
        ]))
    }
}

impl Widget for EventList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::from(Span::styled(self.title(), styles::text_secondary())));

        let placeholder = match self.events {
            None => Some("Loading…"),
            Some([]) => Some("No events in this range"),
            Some(_) => None,
        };

        if let Some(text) = placeholder {
            Paragraph::new(Line::from(Span::styled(text, styles::text_muted())))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .events
            .unwrap_or_default()
            .iter()
            .map(|e| self.item(e))
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
