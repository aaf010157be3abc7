//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! this crate never depends on crossterm.

/// Keyboard input relevant to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('r'), InputKey::Char('r'));
        assert_ne!(InputKey::Char('['), InputKey::Char(']'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
