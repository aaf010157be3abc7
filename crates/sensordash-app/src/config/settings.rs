//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use sensordash_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "sensor-dash";

/// Default config location: `<config_dir>/sensor-dash/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults; an unreadable or unparseable one logs a
/// warning and yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings: Settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    normalize(settings)
}

/// Load settings from an explicit `--config` path, or the default location.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        }),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

fn normalize(mut settings: Settings) -> Settings {
    settings.history = settings.history.normalized();
    settings.security = settings.security.normalized();
    settings
}
