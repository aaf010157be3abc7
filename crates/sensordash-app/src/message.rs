//! Message types for the application (TEA pattern)

use sensordash_core::{HistoricalSeries, SecurityEventList};
use sensordash_feed::ChannelEvent;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (key binding, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Push Channel Messages
    // ─────────────────────────────────────────────────────────
    /// Open the push channel for the first time
    StartFeed,

    /// Event reported by the channel driver
    Channel(ChannelEvent),

    /// The reconnect timer fired
    ReconnectDue,

    // ─────────────────────────────────────────────────────────
    // View Messages
    // ─────────────────────────────────────────────────────────
    /// Switch between the Live and History tabs
    SwitchTab,

    // ─────────────────────────────────────────────────────────
    // Historical Data Messages
    // ─────────────────────────────────────────────────────────
    /// Reload historical data for the selected range
    RefreshHistory,
    NextHistoryRange,
    PrevHistoryRange,

    /// Historical data loaded
    HistoricalLoaded {
        generation: u64,
        series: HistoricalSeries,
    },

    /// Historical data request failed
    HistoricalFailed {
        generation: u64,
        hours: u32,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Security Event Messages
    // ─────────────────────────────────────────────────────────
    /// Reload security events for the selected range
    RefreshSecurity,
    NextSecurityRange,
    PrevSecurityRange,

    /// Security events loaded
    SecurityEventsLoaded {
        generation: u64,
        events: SecurityEventList,
    },

    /// Security events request failed
    SecurityEventsFailed {
        generation: u64,
        hours: u32,
        error: String,
    },
}

impl Message {
    /// Messages that bring the dashboard up: open the feed and load both
    /// ranges.
    pub fn startup() -> [Message; 3] {
        [
            Message::StartFeed,
            Message::RefreshHistory,
            Message::RefreshSecurity,
        ]
    }
}
