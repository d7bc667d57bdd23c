//! Validation of a fully merged configuration.
//!
//! Runs once over the merged object and collects every failure; a [`ResolvedConfig`] is only
//! built when the list comes back empty.

use super::resolved::{
    MochaSpec, OptimizerSettings, PathSpec, ResolvedCompiler, ResolvedConfig, ZksolcSpec,
    ZksolcVersion,
};
use super::{CompilerSpec, NetworkSpec, PartialConfig, IN_PROCESS_NETWORK};
use crate::error::{ValidationError, ValidationErrors};
use semver::Version;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use url::Url;

/// Validate `merged` and build the resolved configuration from it.
pub(crate) fn validate(merged: PartialConfig) -> Result<ResolvedConfig, ValidationErrors> {
    let mut errors = Vec::new();

    let zksolc = validate_zksolc(&merged, &mut errors);
    let compilers = validate_compilers(&merged, &mut errors);
    let paths = validate_paths(&merged, &mut errors);
    let networks = validate_networks(merged.networks, &mut errors);
    let default_network = validate_default_network(merged.default_network, &networks, &mut errors);
    let mocha = validate_mocha(merged.mocha.and_then(|m| m.timeout), &mut errors);

    match (zksolc, compilers, paths, default_network, mocha) {
        (Some(zksolc), Some(compilers), Some(paths), Some(default_network), Some(mocha))
            if errors.is_empty() =>
        {
            Ok(ResolvedConfig::new(
                zksolc,
                compilers,
                paths,
                default_network,
                networks,
                mocha,
            ))
        }
        _ => Err(ValidationErrors::new(errors)),
    }
}

fn validate_zksolc(merged: &PartialConfig, errors: &mut Vec<ValidationError>) -> Option<ZksolcSpec> {
    let zksolc = merged.zksolc.clone().unwrap_or_default();
    let version = match zksolc.version.as_deref() {
        None => {
            errors.push(ValidationError::new("zksolc.version", "is required"));
            None
        }
        Some("latest") => Some(ZksolcVersion::Latest),
        Some(raw) => match Version::parse(raw) {
            Ok(version) => Some(ZksolcVersion::Exact(version)),
            Err(e) => {
                errors.push(ValidationError::new(
                    "zksolc.version",
                    format!("'{}' is neither 'latest' nor a semantic version ({})", raw, e),
                ));
                None
            }
        },
    };

    Some(ZksolcSpec {
        version: version?,
        compiler_source: zksolc.compiler_source.unwrap_or_default(),
    })
}

fn validate_compilers(
    merged: &PartialConfig,
    errors: &mut Vec<ValidationError>,
) -> Option<Vec<ResolvedCompiler>> {
    let Some(compilers) = merged.solidity.as_ref().and_then(|s| s.compilers.as_ref()) else {
        errors.push(ValidationError::new("solidity.compilers", "is required"));
        return None;
    };
    if compilers.is_empty() {
        errors.push(ValidationError::new(
            "solidity.compilers",
            "must declare at least one compiler",
        ));
        return None;
    }

    let before = errors.len();
    let resolved: Vec<ResolvedCompiler> = compilers
        .iter()
        .enumerate()
        .filter_map(|(i, spec)| validate_compiler(i, spec, errors))
        .collect();

    if errors.len() == before {
        Some(resolved)
    } else {
        None
    }
}

fn validate_compiler(
    index: usize,
    spec: &CompilerSpec,
    errors: &mut Vec<ValidationError>,
) -> Option<ResolvedCompiler> {
    let field = |name: &str| format!("solidity.compilers[{}].{}", index, name);

    let version = match Version::parse(&spec.version) {
        Ok(version) => Some(version),
        Err(e) => {
            errors.push(ValidationError::new(
                field("version"),
                format!("'{}' is not a semantic version ({})", spec.version, e),
            ));
            None
        }
    };

    let runs = if spec.optimizer_runs < 0 {
        errors.push(ValidationError::new(
            field("optimizerRuns"),
            format!("must not be negative (got {})", spec.optimizer_runs),
        ));
        None
    } else {
        match u32::try_from(spec.optimizer_runs) {
            Ok(runs) => Some(runs),
            Err(_) => {
                errors.push(ValidationError::new(
                    field("optimizerRuns"),
                    format!("must be at most {} (got {})", u32::MAX, spec.optimizer_runs),
                ));
                None
            }
        }
    };

    Some(ResolvedCompiler {
        version: version?,
        optimizer: OptimizerSettings {
            enabled: spec.optimizer_enabled,
            runs: runs?,
            details: spec.optimizer_details,
        },
    })
}

fn validate_paths(merged: &PartialConfig, errors: &mut Vec<ValidationError>) -> Option<PathSpec> {
    let paths = merged.paths.clone().unwrap_or_default();
    let mut required = |name: &str, value: Option<PathBuf>| match value {
        Some(path) if !path.as_os_str().is_empty() => Some(path),
        _ => {
            errors.push(ValidationError::new(
                format!("paths.{}", name),
                "must not be empty",
            ));
            None
        }
    };

    let sources = required("sources", paths.sources);
    let tests = required("tests", paths.tests);
    let cache = required("cache", paths.cache);
    let artifacts = required("artifacts", paths.artifacts);

    Some(PathSpec {
        sources: sources?,
        tests: tests?,
        cache: cache?,
        artifacts: artifacts?,
    })
}

fn validate_networks(
    networks: BTreeMap<String, NetworkSpec>,
    errors: &mut Vec<ValidationError>,
) -> BTreeMap<String, NetworkSpec> {
    let l1_networks: BTreeSet<String> = networks
        .iter()
        .filter(|(_, network)| !network.zksync)
        .map(|(name, _)| name.clone())
        .collect();
    let zksync_networks: BTreeSet<String> = networks
        .iter()
        .filter(|(_, network)| network.zksync)
        .map(|(name, _)| name.clone())
        .collect();

    networks
        .into_iter()
        .map(|(name, mut network)| {
            let field = |key: &str| format!("networks.{}.{}", name, key);

            match network.url.as_deref() {
                Some(url) => {
                    if let Err(e) = Url::parse(url) {
                        errors.push(ValidationError::new(
                            field("url"),
                            format!("'{}' is not a valid URI ({})", url, e),
                        ));
                    }
                }
                None if name != IN_PROCESS_NETWORK => {
                    errors.push(ValidationError::new(field("url"), "is required"));
                }
                None => {}
            }

            if let Some(verify_url) = network.verify_url.as_deref() {
                if let Err(e) = Url::parse(verify_url) {
                    errors.push(ValidationError::new(
                        field("verifyURL"),
                        format!("'{}' is not a valid URI ({})", verify_url, e),
                    ));
                }
            }

            if network.zksync {
                match network.eth_network.as_deref() {
                    None => errors.push(ValidationError::new(
                        field("ethNetwork"),
                        "is required for zkSync networks",
                    )),
                    Some(eth) if eth == name => errors.push(ValidationError::new(
                        field("ethNetwork"),
                        "must not name the network itself",
                    )),
                    Some(eth) if zksync_networks.contains(eth) => errors.push(ValidationError::new(
                        field("ethNetwork"),
                        format!("'{}' is a zkSync network, not an L1 network", eth),
                    )),
                    Some(eth) if l1_networks.contains(eth) || Url::parse(eth).is_ok() => {}
                    Some(eth) => errors.push(ValidationError::new(
                        field("ethNetwork"),
                        format!("'{}' is neither a configured network nor a valid URI", eth),
                    )),
                }
            }

            network.name = name.clone();
            (name, network)
        })
        .collect()
}

fn validate_default_network(
    default_network: Option<String>,
    networks: &BTreeMap<String, NetworkSpec>,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match default_network {
        Some(name) if name.is_empty() => {
            errors.push(ValidationError::new("defaultNetwork", "must not be empty"));
            None
        }
        Some(name) if !networks.contains_key(&name) => {
            errors.push(ValidationError::new(
                "defaultNetwork",
                format!("'{}' is not a configured network", name),
            ));
            None
        }
        Some(name) => Some(name),
        None => {
            errors.push(ValidationError::new("defaultNetwork", "is required"));
            None
        }
    }
}

fn validate_mocha(timeout: Option<i64>, errors: &mut Vec<ValidationError>) -> Option<MochaSpec> {
    match timeout {
        Some(ms) if ms > 0 => Some(MochaSpec {
            timeout_ms: ms as u64,
        }),
        Some(ms) => {
            errors.push(ValidationError::new(
                "mocha.timeout",
                format!("must be greater than zero (got {})", ms),
            ));
            None
        }
        None => {
            errors.push(ValidationError::new("mocha.timeout", "is required"));
            None
        }
    }
}
