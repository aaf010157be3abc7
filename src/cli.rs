//! Command line arguments and their merge into settings

use std::path::PathBuf;

use clap::Parser;

use sensordash_app::config::{resolve_settings, Settings};
use sensordash_core::prelude::*;
use sensordash_feed::Endpoints;

/// Sensor Dash - live sensor telemetry in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "sensordash")]
#[command(about = "A live sensor telemetry dashboard for the terminal", long_about = None)]
pub struct Args {
    /// Sensor server origin, e.g. http://raspberrypi.local:8000
    #[arg(value_name = "ORIGIN")]
    pub origin: Option<String>,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial historical data range in hours
    #[arg(long, value_name = "HOURS")]
    pub hours: Option<u32>,

    /// Initial security events range in hours
    #[arg(long, value_name = "HOURS")]
    pub security_hours: Option<u32>,
}

impl Args {
    /// Load settings, apply command line overrides and validate the origin.
    pub fn resolve(&self) -> Result<(Settings, Endpoints)> {
        let settings = resolve_settings(self.config.as_deref())?;
        let settings = self.apply(settings);
        let endpoints = Endpoints::parse(&settings.server.origin)?;
        Ok((settings, endpoints))
    }

    /// Apply the overrides on top of loaded settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(origin) = &self.origin {
            settings.server.origin = origin.trim().to_string();
        }
        if let Some(hours) = self.hours {
            settings.history.default_hours = hours;
            settings.history = settings.history.normalized();
        }
        if let Some(hours) = self.security_hours {
            settings.security.default_hours = hours;
            settings.security = settings.security.normalized();
        }
        settings
    }
}
