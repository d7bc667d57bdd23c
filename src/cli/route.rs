//! CLI route: single route table and run context. Dispatches to the config facade and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_check_summary, format_config_json, format_config_text, format_config_toml,
    format_networks_json, format_networks_text, format_paths_text,
};
use crate::config::{ConfigLoader, LoadOptions, ResolvedConfig};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Runtime context for CLI execution: workspace root and the configuration resolved from it.
/// Resolution happens once, here; commands only read the result.
pub struct RunContext {
    workspace_root: PathBuf,
    config: Arc<ResolvedConfig>,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, options: &LoadOptions) -> Result<Self, ConfigError> {
        let config = ConfigLoader::load_with(&workspace_root, options)?;
        Ok(Self {
            workspace_root,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> Arc<ResolvedConfig> {
        Arc::clone(&self.config)
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ConfigError> {
        debug!(command = ?command, "Executing command");
        match command {
            Commands::Check => Ok(format_check_summary(&self.config)),
            Commands::Show { format } => match format.as_str() {
                "text" => Ok(format_config_text(&self.config)),
                "json" => format_config_json(&self.config),
                "toml" => format_config_toml(&self.config),
                other => Err(unsupported_format(other)),
            },
            Commands::Networks { format } => match format.as_str() {
                "text" => Ok(format_networks_text(&self.config)),
                "json" => format_networks_json(&self.config),
                other => Err(unsupported_format(other)),
            },
            Commands::Paths => Ok(format_paths_text(&self.config, &self.workspace_root)),
        }
    }
}

fn unsupported_format(format: &str) -> ConfigError {
    ConfigError::Render(format!("Unsupported output format: {}", format))
}
