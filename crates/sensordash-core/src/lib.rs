//! # sensordash-core - Core Domain Types
//!
//! Foundation crate for Sensor Dash. Provides the reading and history models,
//! bounded buffers, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Readings (`reading`)
//! - [`SensorUpdate`] - A (possibly partial) reading from the push feed
//! - [`ReadingRow`] - One formatted row of the readings table
//! - [`Metric`], [`TimestampedPoint`] - Chartable metrics and their samples
//!
//! ### Buffers (`buffer`)
//! - [`RingBuffer`] / [`SeriesBuffer`] - 60-point sliding window per live chart
//! - [`ReadingsTable`] - Newest-first, 10-row table
//!
//! ### History (`history`)
//! - [`HistoricalSeries`] - Server-queried temperature/humidity range
//! - [`SecurityEventList`] - Motion and smoke events for a range
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use sensordash_core::prelude::*;
//! ```

pub mod buffer;
pub mod error;
pub mod history;
pub mod logging;
pub mod prelude;
pub mod reading;
pub mod types;

pub use buffer::{
    ReadingsTable, RingBuffer, SeriesBuffer, LIVE_SERIES_CAPACITY, READINGS_TABLE_CAPACITY,
};
pub use error::{Error, Result, ResultExt};
pub use history::{
    parse_timestamp, HistoricalSeries, SecurityEvent, SecurityEventKind, SecurityEventList,
};
pub use reading::{
    format_value, motion_status, smoke_status, Metric, ReadingRow, SensorUpdate,
    TimestampedPoint, MISSING_VALUE,
};
pub use types::ConnectionState;
