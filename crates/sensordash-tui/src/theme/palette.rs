//! Color palette for the dashboard.

use ratatui::style::Color;

// --- Background ---
pub const DEEPEST_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Series ---
pub const SERIES_TEMPERATURE: Color = Color::LightRed;
pub const SERIES_HUMIDITY: Color = Color::LightBlue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_colors_are_distinct() {
        assert_ne!(SERIES_TEMPERATURE, SERIES_HUMIDITY);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(STATUS_GREEN, STATUS_RED);
        assert_ne!(STATUS_RED, STATUS_YELLOW);
    }
}
