//! Configuration file parsing for Sensor Dash
//!
//! Supports `<config_dir>/sensor-dash/config.toml` (or an explicit
//! `--config` path) with `[server]`, `[feed]`, `[history]` and `[security]`
//! sections. Every field has a default.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_settings, CONFIG_FILENAME};
pub use types::*;
