//! Push-channel lifecycle as a pure state machine.
//!
//! The [`ConnectionManager`] never performs I/O. It consumes [`ChannelEvent`]s
//! reported by the channel driver and returns [`ConnectionCommand`]s for the
//! caller to execute: open a socket, publish a state change, dispatch a frame,
//! or arm the reconnect timer.
//!
//! ```text
//!              start() / reconnect_due()
//! Disconnected ─────────────────────────▶ Connecting
//!      ▲                                      │ Opened
//!      │  Error / Closed                      ▼
//!      └─────────────────────────────────  Connected
//!         (schedules exactly one reconnect)
//! ```

use std::time::Duration;

use sensordash_core::prelude::*;
use sensordash_core::ConnectionState;

/// Delay between a closure and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Something the channel driver observed on the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The socket handshake completed.
    Opened,
    /// One inbound text frame, unparsed.
    Message(String),
    /// The socket failed (including a failed connect).
    Error(String),
    /// The socket closed, cleanly or not.
    Closed,
}

impl ChannelEvent {
    fn is_terminal(&self) -> bool {
        matches!(self, ChannelEvent::Error(_) | ChannelEvent::Closed)
    }
}

/// Side effect requested by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionCommand {
    /// Open a push channel to `url`.
    Open { url: String },
    /// The connection state changed; update the status badge.
    StateChanged(ConnectionState),
    /// Hand a raw frame to the message dispatcher.
    Dispatch(String),
    /// Call [`ConnectionManager::reconnect_due`] after this delay.
    ScheduleReconnect(Duration),
}

/// Owns the push-channel state and the reconnect policy.
///
/// Fixed delay, unbounded retries, one reconnect per closure.
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    url: String,
    reconnect_delay: Duration,
    state: ConnectionState,
    reconnect_pending: bool,
    attempts: u64,
}

impl ConnectionManager {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_delay(url, DEFAULT_RECONNECT_DELAY)
    }

    pub fn with_delay(url: impl Into<String>, reconnect_delay: Duration) -> Self {
        Self {
            url: url.into(),
            reconnect_delay,
            state: ConnectionState::Disconnected,
            reconnect_pending: false,
            attempts: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn reconnect_delay(&self) -> Duration {
        self.reconnect_delay
    }

    /// Whether a reconnect timer is armed and has not fired yet.
    pub fn reconnect_pending(&self) -> bool {
        self.reconnect_pending
    }

    /// Number of connection attempts issued so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Open the first connection.
    ///
    /// Does nothing while a connection is open, being opened, or waiting on
    /// the reconnect timer.
    pub fn start(&mut self) -> Vec<ConnectionCommand> {
        if self.state != ConnectionState::Disconnected || self.reconnect_pending {
            debug!("feed: start ignored in state {}", self.state);
            return Vec::new();
        }
        self.open()
    }

    /// The reconnect timer fired.
    pub fn reconnect_due(&mut self) -> Vec<ConnectionCommand> {
        if !self.reconnect_pending {
            debug!("feed: reconnect timer fired with nothing pending");
            return Vec::new();
        }
        self.reconnect_pending = false;
        info!("feed: reconnecting to {}", self.url);
        self.open()
    }

    /// Apply one event reported by the channel driver.
    pub fn handle_event(&mut self, event: ChannelEvent) -> Vec<ConnectionCommand> {
        match event {
            ChannelEvent::Opened => {
                if self.state != ConnectionState::Connecting {
                    debug!("feed: stray open event in state {}", self.state);
                    return Vec::new();
                }
                info!("feed: connected to {}", self.url);
                self.transition(ConnectionState::Connected)
            }
            ChannelEvent::Message(raw) => {
                if self.state != ConnectionState::Connected {
                    debug!("feed: dropping frame received in state {}", self.state);
                    return Vec::new();
                }
                vec![ConnectionCommand::Dispatch(raw)]
            }
            terminal => {
                debug_assert!(terminal.is_terminal());
                self.close(terminal)
            }
        }
    }

    fn open(&mut self) -> Vec<ConnectionCommand> {
        self.attempts += 1;
        let mut commands = self.transition(ConnectionState::Connecting);
        commands.push(ConnectionCommand::Open {
            url: self.url.clone(),
        });
        commands
    }

    fn close(&mut self, event: ChannelEvent) -> Vec<ConnectionCommand> {
        if self.state == ConnectionState::Disconnected {
            debug!("feed: duplicate terminal event {:?} ignored", event);
            return Vec::new();
        }

        match &event {
            ChannelEvent::Error(reason) => warn!("feed: channel error: {reason}"),
            _ => info!("feed: channel closed"),
        }

        let mut commands = self.transition(ConnectionState::Disconnected);
        self.reconnect_pending = true;
        commands.push(ConnectionCommand::ScheduleReconnect(self.reconnect_delay));
        commands
    }

    fn transition(&mut self, next: ConnectionState) -> Vec<ConnectionCommand> {
        self.state = next;
        vec![ConnectionCommand::StateChanged(next)]
    }
}
