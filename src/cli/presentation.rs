//! Presentation: text, JSON and TOML formatters for resolved configuration.

use crate::config::{ResolvedConfig, ZksolcVersion};
use crate::error::ConfigError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One-line confirmation printed by `check`.
pub fn format_check_summary(config: &ResolvedConfig) -> String {
    format!(
        "configuration OK: {} compiler(s), {} network(s), default network '{}'",
        config.compilers().len(),
        config.networks().len(),
        config.default_network_name()
    )
}

/// Human-readable summary of every section.
pub fn format_config_text(config: &ResolvedConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format_section_heading("zksolc")));
    let version = match &config.zksolc().version {
        ZksolcVersion::Latest => "latest".to_string(),
        ZksolcVersion::Exact(version) => version.to_string(),
    };
    out.push_str(&format!("  Version: {}\n", version));
    out.push_str(&format!("  Source: {}\n\n", config.zksolc().compiler_source));

    out.push_str(&format!("{}\n\n", format_section_heading("Compilers")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Version", "Optimizer", "Runs", "Yul"]);
    for compiler in config.compilers() {
        let yul = compiler
            .optimizer
            .details
            .and_then(|d| d.yul)
            .map(|yul| if yul { "on" } else { "off" })
            .unwrap_or("-");
        table.add_row(vec![
            compiler.version.to_string(),
            if compiler.optimizer.enabled { "enabled" } else { "disabled" }.to_string(),
            compiler.optimizer.runs.to_string(),
            yul.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("{}\n", format_section_heading("Paths")));
    let paths = config.paths();
    out.push_str(&format!("  Sources: {}\n", paths.sources.display()));
    out.push_str(&format!("  Tests: {}\n", paths.tests.display()));
    out.push_str(&format!("  Cache: {}\n", paths.cache.display()));
    out.push_str(&format!("  Artifacts: {}\n\n", paths.artifacts.display()));

    out.push_str(&format!("{}\n", format_section_heading("Networks")));
    out.push_str(&format!("  Default: {}\n", config.default_network_name()));
    out.push_str(&format!(
        "  Configured: {}\n\n",
        config.networks().keys().cloned().collect::<Vec<_>>().join(", ")
    ));

    out.push_str(&format!("{}\n", format_section_heading("Mocha")));
    out.push_str(&format!("  Timeout: {} ms", config.mocha().timeout_ms));
    out
}

/// The resolved configuration in the file schema, as JSON.
pub fn format_config_json(config: &ResolvedConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(&config.to_partial())?)
}

/// The resolved configuration in the file schema, as TOML.
///
/// TOML has no null, so null values in network pass-through fields are left out, both as
/// table entries and as array elements.
pub fn format_config_toml(config: &ResolvedConfig) -> Result<String, ConfigError> {
    let mut partial = config.to_partial();
    for network in partial.networks.values_mut() {
        network.extra.retain(|_, value| !value.is_null());
        network.extra.values_mut().for_each(strip_nulls);
    }
    Ok(toml::to_string_pretty(&partial)?)
}

fn strip_nulls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        serde_json::Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

pub fn format_networks_text(config: &ResolvedConfig) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Network", "URL", "zkSync", "L1 network", "Default"]);
    for (name, network) in config.networks() {
        let default_marker = if name == config.default_network_name() {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            name.clone(),
            network
                .url
                .clone()
                .unwrap_or_else(|| "(in-process)".to_string()),
            if network.zksync { "yes" } else { "no" }.to_string(),
            network.eth_network.clone().unwrap_or_else(|| "-".to_string()),
            default_marker.to_string(),
        ]);
    }
    format!("{}", table)
}

pub fn format_networks_json(config: &ResolvedConfig) -> Result<String, ConfigError> {
    let networks: Vec<serde_json::Value> = config
        .networks()
        .iter()
        .map(|(name, network)| {
            serde_json::json!({
                "name": name,
                "url": network.url,
                "zksync": network.zksync,
                "ethNetwork": network.eth_network,
                "verifyURL": network.verify_url,
                "default": name == config.default_network_name(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&networks)?)
}

/// Paths joined onto `root`, one per line.
pub fn format_paths_text(config: &ResolvedConfig, root: &Path) -> String {
    let paths = config.resolve_paths(root);
    [
        ("sources", &paths.sources),
        ("tests", &paths.tests),
        ("cache", &paths.cache),
        ("artifacts", &paths.artifacts),
    ]
    .iter()
    .map(|(name, path)| format!("{:<10} {}", name, path.display()))
    .collect::<Vec<_>>()
    .join("\n")
}
