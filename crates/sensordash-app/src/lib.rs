//! sensordash-app - Application state and orchestration for Sensor Dash
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`Message`]s
//! go through [`handler::update`], which mutates [`AppState`] and may return an
//! [`UpdateAction`] for the [`ActionRunner`] to execute in the background.
//! It also owns configuration loading, the message dispatcher and the render
//! sink the TUI draws from.

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod handler;
pub mod input_key;
pub mod live;
pub mod message;
pub mod process;
pub mod range;
pub mod signals;
pub mod sink;
pub mod state;

// Re-export primary types
pub use actions::ActionRunner;
pub use config::Settings;
pub use dispatch::dispatch;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use live::LiveSeries;
pub use message::Message;
pub use process::process_message;
pub use range::{LoadStatus, RangeLoader, RangeSelector, RequestSequencer};
pub use sink::{DashboardSlots, Indicator, RenderSink};
pub use state::{ActiveTab, AppState};
