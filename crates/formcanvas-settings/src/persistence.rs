//! Settings persistence
//!
//! Resolves the platform configuration directory and loads the canvas
//! configuration from it, falling back to defaults when no file exists.

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "formcanvas";
const CONFIG_FILE: &str = "config.toml";

/// Location of the user's configuration file.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        ConfigError::UnsupportedPlatform("no configuration directory available".to_string())
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads the config at `path`, or returns defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> SettingsResult<Config> {
    if !path.exists() {
        tracing::info!(
            "No config at {}, using default settings",
            path.display()
        );
        return Ok(Config::default());
    }
    Config::load_from_file(path).map_err(|e| match e {
        SettingsError::IoError(io) => {
            SettingsError::LoadError(format!("{}: {}", path.display(), io))
        }
        other => other,
    })
}

/// Writes `config` to `path`, creating parent directories as needed.
pub fn save(config: &Config, path: &Path) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
    }
    config
        .save_to_file(path)
        .map_err(|e| SettingsError::SaveError(e.to_string()))
}
