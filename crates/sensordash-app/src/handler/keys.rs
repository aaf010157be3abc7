//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
///
/// Every binding works on both tabs.
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchTab),

        // Historical data
        InputKey::Char('r') => Some(Message::RefreshHistory),
        InputKey::Char(']') => Some(Message::NextHistoryRange),
        InputKey::Char('[') => Some(Message::PrevHistoryRange),

        // Security events
        InputKey::Char('e') => Some(Message::RefreshSecurity),
        InputKey::Char('}') => Some(Message::NextSecurityRange),
        InputKey::Char('{') => Some(Message::PrevSecurityRange),

        _ => None,
    }
}
