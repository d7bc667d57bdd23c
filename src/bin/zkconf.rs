//! zkconf CLI Binary
//!
//! Resolves the project's build configuration once at startup and prints it, or prints every
//! validation error and exits non-zero before any other work happens.

use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};
use zkconf::cli::{render_error, Cli, RunContext};
use zkconf::config::LoadOptions;
use zkconf::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Initialize logging early
    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("zkconf starting");
    let color = stderr_color();

    let context = match RunContext::new(cli.workspace.clone(), &build_load_options(&cli)) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Configuration could not be resolved: {}", e);
            eprintln!("{}", render_error(&e, color));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", render_error(&e, color));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit --log-* flags override --verbose override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }
    config.color = stderr_color();

    config
}

fn build_load_options(cli: &Cli) -> LoadOptions {
    LoadOptions {
        config_file: cli.config.clone(),
        network: cli.network.clone(),
        include_global: !cli.no_global,
        include_env: true,
    }
}

fn stderr_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}
