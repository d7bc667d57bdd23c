//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ConfigError;
use owo_colors::OwoColorize;

/// Map domain errors to a plain string for CLI output.
pub fn map_error(e: &ConfigError) -> String {
    e.to_string()
}

/// Map domain errors to CLI output, listing validation failures one per line.
pub fn render_error(e: &ConfigError, color: bool) -> String {
    let ConfigError::Validation(errors) = e else {
        let text = map_error(e);
        return if color {
            format!("{} {}", "error:".red().bold(), text)
        } else {
            format!("error: {}", text)
        };
    };

    let heading = format!("{} validation error(s):", errors.len());
    let mut out = if color {
        format!("{} {}", "error:".red().bold(), heading)
    } else {
        format!("error: {}", heading)
    };
    for error in errors {
        if color {
            out.push_str(&format!("\n  - {}: {}", error.field.yellow(), error.reason));
        } else {
            out.push_str(&format!("\n  - {}", error));
        }
    }
    out
}
