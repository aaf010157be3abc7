//! Custom widget components

mod event_list;
mod header;
mod range_bar;
mod readings_table;
mod series_chart;
mod status_bar;
mod tabs;
mod value_card;

pub use event_list::EventList;
pub use header::MainHeader;
pub use range_bar::{range_label, RangeBar};
pub use readings_table::ReadingsView;
pub use series_chart::SeriesChart;
pub use status_bar::StatusBar;
pub use tabs::DashboardTabs;
pub use value_card::ValueCard;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `max_width` terminal columns, ending in `…`
/// when anything was cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
