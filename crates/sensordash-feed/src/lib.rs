//! # sensordash-feed - Sensor Server Client
//!
//! Talks to the sensor server: the live WebSocket push channel and the two
//! range-query HTTP endpoints.
//!
//! Depends on [`sensordash_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Endpoints
//! - [`Endpoints`] - Validated origin and the URLs derived from it
//!
//! ### Push Channel
//! - [`ConnectionManager`] - Pure connection state machine with fixed-delay reconnect
//! - [`ChannelEvent`], [`ConnectionCommand`] - Its inputs and outputs
//! - [`spawn_channel()`] - Background WebSocket driver emitting [`ChannelEvent`]s
//! - [`decode_update()`] - Decode a frame, unwrapping one envelope level
//!
//! ### Range Queries
//! - [`RangeApi`] - Historical data and security events by hours
//! - [`HttpRangeApi`] - `reqwest` implementation

pub mod api;
pub mod channel;
pub mod connection;
pub mod endpoint;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{
    HistoricalDataResponse, HttpRangeApi, LocalRangeApi, RangeApi, SecurityEventsResponse,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use channel::{spawn_channel, ChannelHandle};
pub use connection::{
    ChannelEvent, ConnectionCommand, ConnectionManager, DEFAULT_RECONNECT_DELAY,
};
pub use endpoint::Endpoints;
pub use protocol::decode_update;
