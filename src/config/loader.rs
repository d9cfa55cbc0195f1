//! Configuration loading from the file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::{KeyhintError, Result};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;

/// Path of the default config file with `~` expanded.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from `config_path`.
///
/// A missing file is not an error and yields `Config::default()`. A file that
/// cannot be read or parsed is returned as an error so the caller can report
/// it once logging is up, then fall back to defaults.
#[instrument(name = "load_config", skip_all, fields(path = %config_path.display()))]
pub fn load_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        info!("Config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path).map_err(|source| KeyhintError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str::<Config>(&content).map_err(|source| {
        KeyhintError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        }
    })?;

    info!(bindings = config.bindings.len(), "Successfully loaded config");
    Ok(config)
}
