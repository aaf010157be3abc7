//! Centralized theme for the dashboard.
//!
//! - `palette` holds raw color constants
//! - `styles` builds semantic styles and blocks from them

pub mod palette;
pub mod styles;
