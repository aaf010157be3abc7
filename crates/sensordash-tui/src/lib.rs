//! sensordash-tui - Terminal UI for Sensor Dash
//!
//! Renders [`sensordash_app::AppState`] with ratatui and feeds terminal input
//! back into the app's message loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, run_with_api};
