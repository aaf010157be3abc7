//! Sensor Dash Library
//!
//! A terminal dashboard for live and historical sensor telemetry.

pub mod cli;

pub use cli::Args;

use sensordash_core::prelude::*;

/// Main application entry point
///
/// Installs error reporting and file logging, resolves configuration from
/// `args`, then runs the dashboard until the user quits.
pub async fn run(args: Args) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the terminal belongs to the dashboard
    sensordash_core::logging::init()?;

    let (settings, endpoints) = args.resolve()?;
    info!(
        "Server: {} (history {}h, security {}h)",
        endpoints.origin(),
        settings.history.default_hours,
        settings.security.default_hours
    );

    let result = sensordash_tui::run(settings, endpoints).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Sensor Dash exiting");
    result
}
