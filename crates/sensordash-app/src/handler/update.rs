//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{feed, keys::handle_key, ranges, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Push Channel Messages
        // ─────────────────────────────────────────────────────────
        Message::StartFeed => {
            let commands = state.connection.start();
            feed::apply_commands(state, commands)
        }

        Message::Channel(event) => {
            let commands = state.connection.handle_event(event);
            feed::apply_commands(state, commands)
        }

        Message::ReconnectDue => {
            let commands = state.connection.reconnect_due();
            feed::apply_commands(state, commands)
        }

        Message::SwitchTab => {
            state.active_tab = state.active_tab.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Historical Data Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshHistory => ranges::load_history(state),

        Message::NextHistoryRange => {
            state.history.selector.next();
            ranges::load_history(state)
        }

        Message::PrevHistoryRange => {
            state.history.selector.prev();
            ranges::load_history(state)
        }

        Message::HistoricalLoaded { generation, series } => {
            ranges::handle_historical_loaded(state, generation, series)
        }

        Message::HistoricalFailed {
            generation,
            hours,
            error,
        } => ranges::handle_historical_failed(state, generation, hours, error),

        // ─────────────────────────────────────────────────────────
        // Security Event Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshSecurity => ranges::load_security(state),

        Message::NextSecurityRange => {
            state.security.selector.next();
            ranges::load_security(state)
        }

        Message::PrevSecurityRange => {
            state.security.selector.prev();
            ranges::load_security(state)
        }

        Message::SecurityEventsLoaded { generation, events } => {
            ranges::handle_security_loaded(state, generation, events)
        }

        Message::SecurityEventsFailed {
            generation,
            hours,
            error,
        } => ranges::handle_security_failed(state, generation, hours, error),
    }
}
