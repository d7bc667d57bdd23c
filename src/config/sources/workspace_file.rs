//! Project config file source: zkconf.toml (or zkconf.json) and zkconf.{ZKCONF_ENV}.toml

use super::parse_file;
use crate::config::PartialConfig;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// File stem of the project configuration file.
pub const PROJECT_FILE_STEM: &str = "zkconf";

/// Environment variable selecting the environment-specific project file.
pub const ENV_SELECTOR: &str = "ZKCONF_ENV";

/// The project file in `root`: `zkconf.toml`, else `zkconf.json`.
pub fn project_config_path(root: &Path) -> Option<PathBuf> {
    ["toml", "json"]
        .iter()
        .map(|ext| root.join(format!("{}.{}", PROJECT_FILE_STEM, ext)))
        .find(|path| path.is_file())
}

/// The environment-specific project file for `env_name`, if it exists.
pub fn env_config_path(root: &Path, env_name: &str) -> Option<PathBuf> {
    let path = root.join(format!("{}.{}.toml", PROJECT_FILE_STEM, env_name));
    path.is_file().then_some(path)
}

/// Read the project files in `root`, using `ZKCONF_ENV` to pick the environment file.
pub fn read(root: &Path) -> Result<PartialConfig, ConfigError> {
    let env_name = std::env::var(ENV_SELECTOR).ok();
    read_for_env(root, env_name.as_deref())
}

/// Read the project files in `root`.
/// Precedence: zkconf.toml (base) then zkconf.{env}.toml (env-specific).
pub fn read_for_env(root: &Path, env_name: Option<&str>) -> Result<PartialConfig, ConfigError> {
    let mut partial = match project_config_path(root) {
        Some(path) => parse_file(&path)?,
        None => PartialConfig::default(),
    };

    if let Some(path) = env_name
        .filter(|name| !name.is_empty())
        .and_then(|name| env_config_path(root, name))
    {
        partial = partial.overlay(parse_file(&path)?);
    }

    Ok(partial)
}
