//! Logging System
//!
//! Structured logging using the `tracing` crate. Log lines go to stderr by default so that
//! command output on stdout stays machine-readable.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive; wins over every other setting.
pub const LOG_ENV: &str = "ZKCONF_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "ZKCONF_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stderr, stdout, file
    pub output: String,

    /// Log file path (required when output is "file")
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on a terminal stream only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: None,
            color: true,
        }
    }
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Stderr,
    Stdout,
    File(PathBuf),
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (ZKCONF_LOG, ZKCONF_LOG_FORMAT)
/// 2. The given config (CLI flags)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = parse_output(config)?;

    let use_color = config.color && !matches!(output, Output::File(_));
    let writer = make_writer(&output)?;

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}

fn make_writer(output: &Output) -> Result<BoxMakeWriter, ConfigError> {
    match output {
        Output::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        Output::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
        Output::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Logging(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ConfigError::Logging(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

/// Build the filter from ZKCONF_LOG or the configured level
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    match config.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(EnvFilter::new(&config.level)),
        other => Err(ConfigError::Logging(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
            other
        ))),
    }
}

fn determine_format(config: &LoggingConfig) -> Result<String, ConfigError> {
    if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    match config.format.as_str() {
        "json" | "text" => Ok(config.format.clone()),
        other => Err(ConfigError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn parse_output(config: &LoggingConfig) -> Result<Output, ConfigError> {
    match config.output.as_str() {
        "stderr" => Ok(Output::Stderr),
        "stdout" => Ok(Output::Stdout),
        "file" => config.file.clone().map(Output::File).ok_or_else(|| {
            ConfigError::Logging("Log output 'file' requires a log file path".to_string())
        }),
        other => Err(ConfigError::Logging(format!(
            "Invalid log output: {} (must be 'stderr', 'stdout' or 'file')",
            other
        ))),
    }
}
