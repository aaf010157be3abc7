//! Screen layout calculations

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border, title row, bottom border.
pub const HEADER_HEIGHT: u16 = 3;

/// One line of key hints.
pub const FOOTER_HEIGHT: u16 = 1;

/// Value cards: borders plus two content rows.
pub const CARD_HEIGHT: u16 = 4;

/// Readings table: borders, column header and ten rows.
pub const TABLE_HEIGHT: u16 = 13;

/// Top-level areas shared by both tabs
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Create the top-level layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas of the Live tab
#[derive(Debug, Clone, Copy)]
pub struct LiveAreas {
    pub cards: [Rect; 4],
    pub temperature_chart: Rect,
    pub humidity_chart: Rect,
    pub table: Rect,
}

/// Split the body into value cards, two live charts and the readings table.
pub fn live(body: Rect) -> LiveAreas {
    let rows = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(TABLE_HEIGHT),
    ])
    .split(body);

    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(rows[0]);
    let charts = split_pair(rows[1]);

    LiveAreas {
        cards: [cards[0], cards[1], cards[2], cards[3]],
        temperature_chart: charts.0,
        humidity_chart: charts.1,
        table: rows[2],
    }
}

/// Areas of the History tab
#[derive(Debug, Clone, Copy)]
pub struct HistoryAreas {
    pub history_bar: Rect,
    pub temperature_chart: Rect,
    pub humidity_chart: Rect,
    pub security_bar: Rect,
    pub motion_list: Rect,
    pub smoke_list: Rect,
}

/// Split the body into the historical charts and the security event lists,
/// each under its own range bar.
pub fn history(body: Rect) -> HistoryAreas {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(3),
        Constraint::Length(1),
        Constraint::Fill(2),
    ])
    .split(body);

    let charts = split_pair(rows[1]);
    let lists = split_pair(rows[3]);

    HistoryAreas {
        history_bar: rows[0],
        temperature_chart: charts.0,
        humidity_chart: charts.1,
        security_bar: rows[2],
        motion_list: lists.0,
        smoke_list: lists.1,
    }
}

fn split_pair(area: Rect) -> (Rect, Rect) {
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (halves[0], halves[1])
}
