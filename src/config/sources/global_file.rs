//! Global config file source: $XDG_CONFIG_HOME/zkconf/config.toml or ~/.config/zkconf/config.toml

use super::parse_file;
use crate::config::PartialConfig;
use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file, if a home or config directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(config_home.join("zkconf").join("config.toml"))
}

/// Read the global config file. A missing file yields an empty partial.
pub fn read() -> Result<PartialConfig, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => parse_file(&path),
        Some(path) => {
            debug!(
                config_path = %path.display(),
                "No global configuration file; skipping"
            );
            Ok(PartialConfig::default())
        }
        None => Ok(PartialConfig::default()),
    }
}
