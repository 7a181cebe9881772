//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::{OptionExt, ResultExt};

use crate::domain::config::AppConfig;
use crate::error::{InvalidSnafu, IoSnafu, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "CLICKY_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the config file path, honouring `CLICKY_CONFIG`
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("", "", "clicky").context(InvalidSnafu {
        message: "could not determine the config directory",
    })?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

/// Load the config from the default location, writing defaults on first run
pub fn load_or_init() -> Result<AppConfig> {
    load_or_init_at(&config_path()?)
}

/// Load the config at `path`. If there is no file yet, write the defaults
/// there so they can be edited; a failed write still yields the defaults.
pub fn load_or_init_at(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        return load_config_from(path);
    }

    let config = AppConfig::default();
    match save_config_to(path, &config) {
        Ok(()) => tracing::info!(path = %path.display(), "Wrote default config"),
        Err(err) => tracing::warn!("Could not write default config: {err}"),
    }
    Ok(config)
}

/// Load a TOML config file; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        tiles = config.board.colours.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Write a config file as pretty TOML, creating parent directories
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).context(IoSnafu { path })?;
    tracing::debug!(path = %path.display(), "Saved config");
    Ok(())
}
