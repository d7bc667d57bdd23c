//! CLI parse: clap types for zkconf. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// zkconf CLI - resolve and validate smart-contract build configuration
#[derive(Parser)]
#[command(name = "zkconf")]
#[command(about = "Resolve and validate smart-contract build configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root containing zkconf.toml or zkconf.json
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides project file discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Network to use instead of defaultNetwork
    #[arg(long)]
    pub network: Option<String>,

    /// Skip the global user configuration file
    #[arg(long)]
    pub no_global: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the configuration and report every validation error
    Check,
    /// Print the resolved configuration
    Show {
        /// Output format (text, json or toml)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List configured networks
    Networks {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print project paths resolved against the workspace root
    Paths,
}
