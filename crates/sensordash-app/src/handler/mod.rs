//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `feed`: Applies connection-manager commands
//! - `ranges`: Historical data and security event loading
//! - `keys`: Key bindings

pub(crate) mod feed;
pub(crate) mod keys;
pub(crate) mod ranges;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open a push channel; its events come back as `Message::Channel`
    OpenChannel { url: String },

    /// Send `Message::ReconnectDue` after `delay`
    ScheduleReconnect { delay: Duration },

    /// Load historical data; the result comes back stamped with `generation`
    FetchHistorical { hours: u32, generation: u64 },

    /// Load security events; the result comes back stamped with `generation`
    FetchSecurityEvents { hours: u32, generation: u64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
