use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::ConfigError;

/// Returns the config directory: `~/.config/trellis/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("trellis"))
}

/// Returns the settings file path: `~/.config/trellis/settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("settings.toml"))
}

/// Tries to load and parse `settings.toml`.
///
/// Returns the IO or parse error on failure, including when the file
/// does not exist.
pub fn try_load() -> Result<Settings, ConfigError> {
    let path = settings_path().ok_or(ConfigError::NoHomeDir)?;
    read_settings(&path)
}

/// Loads the settings from disk, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure is
/// reported on stderr and also returns defaults. This runs before the
/// logging subscriber exists, so it cannot go through `tracing`.
pub fn load() -> Settings {
    match try_load() {
        Ok(settings) => settings,
        Err(e) if e.is_not_found() => Settings::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Settings::default()
        }
    }
}

pub(crate) fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
