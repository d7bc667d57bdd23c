//! ConfigLoader: discovers every configuration source, stacks them, and resolves once.

use super::sources::{env_overrides, global_file, parse_file, workspace_file};
use super::{ConfigResolver, PartialConfig, ResolvedConfig};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which sources to read and which explicit overrides to apply.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Read this file instead of discovering project files in the root
    pub config_file: Option<PathBuf>,
    /// Overrides `defaultNetwork` above every other source
    pub network: Option<String>,
    /// Read the global user file
    pub include_global: bool,
    /// Read `ZKCONF_*` environment overrides
    pub include_env: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config_file: None,
            network: None,
            include_global: true,
            include_env: true,
        }
    }
}

impl LoadOptions {
    /// Only the project files (or the explicit file); no global file, no environment.
    pub fn isolated() -> Self {
        Self {
            include_global: false,
            include_env: false,
            ..Self::default()
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve the configuration of the project at `root` with every source enabled.
    pub fn load(root: &Path) -> Result<ResolvedConfig, ConfigError> {
        Self::load_with(root, &LoadOptions::default())
    }

    /// Load and resolve exactly one file over the built-in defaults.
    pub fn load_from_file(path: &Path) -> Result<ResolvedConfig, ConfigError> {
        let partial = parse_file(path)?;
        Ok(ConfigResolver::new().resolve(partial)?)
    }

    pub fn load_with(root: &Path, options: &LoadOptions) -> Result<ResolvedConfig, ConfigError> {
        let partial = Self::load_partial(root, options)?;
        Ok(ConfigResolver::new().resolve(partial)?)
    }

    /// Stack the enabled sources without resolving.
    /// Precedence (lowest first): global file, project files, environment, explicit network.
    pub fn load_partial(root: &Path, options: &LoadOptions) -> Result<PartialConfig, ConfigError> {
        let mut partial = PartialConfig::default();

        if options.include_global && options.config_file.is_none() {
            partial = partial.overlay(global_file::read()?);
        }

        partial = match &options.config_file {
            Some(path) => partial.overlay(parse_file(path)?),
            None => partial.overlay(workspace_file::read(root)?),
        };

        if options.include_env {
            partial = partial.overlay(env_overrides::read()?);
        }

        if let Some(network) = &options.network {
            debug!(network = %network, "Default network overridden");
            partial.default_network = Some(network.clone());
        }

        Ok(partial)
    }
}
