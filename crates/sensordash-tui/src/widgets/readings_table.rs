//! Readings table: the most recent readings, newest first.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use sensordash_core::{ReadingRow, ReadingsTable};

use crate::theme::styles;

const HEADERS: [&str; 5] = ["Time", "Temperature", "Humidity", "Motion", "Smoke"];

/// Widget over the bounded readings table
pub struct ReadingsView<'a> {
    table: &'a ReadingsTable,
}

impl<'a> ReadingsView<'a> {
    pub fn new(table: &'a ReadingsTable) -> Self {
        Self { table }
    }
}

fn flag_cell(text: &str) -> Cell<'static> {
    let style = if text == "Yes" {
        styles::status_red().add_modifier(Modifier::BOLD)
    } else {
        styles::text_muted()
    };
    Cell::from(Span::styled(text.to_string(), style))
}

fn row(reading: &ReadingRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(Span::styled(reading.time.clone(), styles::text_secondary())),
        Cell::from(Span::styled(reading.temperature.clone(), styles::text_primary())),
        Cell::from(Span::styled(reading.humidity.clone(), styles::text_primary())),
        flag_cell(&reading.motion),
        flag_cell(&reading.smoke),
    ])
}

impl Widget for ReadingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Recent Readings ({}/{}) ", self.table.len(), self.table.capacity());
        let block = styles::glass_block(false)
            .title(Line::from(Span::styled(title, styles::text_secondary())));

        let header = Row::new(HEADERS.map(|h| Cell::from(Span::styled(h, styles::accent_bold()))));
        let rows: Vec<Row> = self.table.rows().map(row).collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{local_time, TestTerminal};
    use sensordash_core::SensorUpdate;

    fn reading(s: u32, temperature: Option<f64>, motion: bool) -> ReadingRow {
        let update = SensorUpdate {
            temperature,
            humidity: Some(50.0),
            motion_detected: Some(motion),
            smoke_detected: None,
        };
        ReadingRow::from_update(&update, local_time(9, 0, s))
    }

    #[test]
    fn test_empty_table_shows_headers() {
        let table = ReadingsTable::default();
        let mut term = TestTerminal::with_size(80, 13);
        term.render_widget(ReadingsView::new(&table), term.area());

        assert!(term.buffer_contains("Recent Readings (0/10)"));
        assert!(term.buffer_contains("Temperature"));
        assert!(term.buffer_contains("Smoke"));
    }

    #[test]
    fn test_rows_render_newest_first() {
        let mut table = ReadingsTable::default();
        table.push(reading(1, Some(20.0), false));
        table.push(reading(2, None, true));

        let mut term = TestTerminal::with_size(80, 13);
        term.render_widget(ReadingsView::new(&table), term.area());

        // border, header, then rows
        assert!(term.line_contains(2, "09:00:02"));
        assert!(term.line_contains(2, "--"));
        assert!(term.line_contains(2, "Yes"));
        assert!(term.line_contains(3, "09:00:01"));
        assert!(term.line_contains(3, "20.0°C"));
    }
}
