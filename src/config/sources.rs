//! Configuration sources and the file reader they share.

pub mod env_overrides;
pub mod global_file;
pub mod workspace_file;

use crate::config::PartialConfig;
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

/// Read one configuration file. The format follows the extension: `.toml` or `.json`.
pub fn parse_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let partial = match extension.as_deref() {
        Some("toml") => toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        Some("json") => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(config_path = %path.display(), "Read configuration file");
    Ok(partial)
}
