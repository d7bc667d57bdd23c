//! Fully resolved configuration: every section present, every value validated.
//!
//! A [`ResolvedConfig`] is only produced by the resolver and has no mutating API; share it
//! across threads as `Arc<ResolvedConfig>`.

use super::{
    CompilerSource, CompilerSpec, NetworkSpec, OptimizerDetails, PartialConfig, PartialMocha,
    PartialPaths, PartialSolidity, PartialZksolc,
};
use semver::Version;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved zkSync compiler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZksolcSpec {
    pub version: ZksolcVersion,
    pub compiler_source: CompilerSource,
}

/// zksolc release selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZksolcVersion {
    Latest,
    Exact(Version),
}

impl fmt::Display for ZksolcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZksolcVersion::Latest => write!(f, "latest"),
            ZksolcVersion::Exact(version) => write!(f, "{}", version),
        }
    }
}

/// A validated compiler entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompiler {
    pub version: Version,
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
    pub details: Option<OptimizerDetails>,
}

/// Project path conventions, all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl PathSpec {
    /// Join relative paths onto `root`. Absolute paths are kept as they are.
    pub fn resolve_against(&self, root: &Path) -> PathSpec {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        PathSpec {
            sources: join(&self.sources),
            tests: join(&self.tests),
            cache: join(&self.cache),
            artifacts: join(&self.artifacts),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MochaSpec {
    pub timeout_ms: u64,
}

impl MochaSpec {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// The validated, immutable build configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    zksolc: ZksolcSpec,
    compilers: Vec<ResolvedCompiler>,
    paths: PathSpec,
    default_network: String,
    networks: BTreeMap<String, NetworkSpec>,
    mocha: MochaSpec,
}

impl ResolvedConfig {
    pub(crate) fn new(
        zksolc: ZksolcSpec,
        compilers: Vec<ResolvedCompiler>,
        paths: PathSpec,
        default_network: String,
        networks: BTreeMap<String, NetworkSpec>,
        mocha: MochaSpec,
    ) -> Self {
        Self {
            zksolc,
            compilers,
            paths,
            default_network,
            networks,
            mocha,
        }
    }

    pub fn zksolc(&self) -> &ZksolcSpec {
        &self.zksolc
    }

    /// Compilers in declaration order.
    pub fn compilers(&self) -> &[ResolvedCompiler] {
        &self.compilers
    }

    pub fn paths(&self) -> &PathSpec {
        &self.paths
    }

    pub fn default_network_name(&self) -> &str {
        &self.default_network
    }

    /// The network named by `defaultNetwork`; always present after validation.
    pub fn default_network(&self) -> &NetworkSpec {
        &self.networks[&self.default_network]
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkSpec> {
        &self.networks
    }

    pub fn network(&self, name: &str) -> Option<&NetworkSpec> {
        self.networks.get(name)
    }

    pub fn mocha(&self) -> &MochaSpec {
        &self.mocha
    }

    /// Paths joined onto the project root.
    pub fn resolve_paths(&self, root: &Path) -> PathSpec {
        self.paths.resolve_against(root)
    }

    /// Express this configuration as a partial one. Resolving the result again yields an
    /// equal configuration.
    pub fn to_partial(&self) -> PartialConfig {
        let compilers = self
            .compilers
            .iter()
            .map(|c| CompilerSpec {
                version: c.version.to_string(),
                optimizer_enabled: c.optimizer.enabled,
                optimizer_runs: i64::from(c.optimizer.runs),
                optimizer_details: c.optimizer.details,
            })
            .collect();

        PartialConfig {
            zksolc: Some(PartialZksolc {
                version: Some(self.zksolc.version.to_string()),
                compiler_source: Some(self.zksolc.compiler_source),
            }),
            solidity: Some(PartialSolidity {
                compilers: Some(compilers),
            }),
            paths: Some(PartialPaths {
                sources: Some(self.paths.sources.clone()),
                tests: Some(self.paths.tests.clone()),
                cache: Some(self.paths.cache.clone()),
                artifacts: Some(self.paths.artifacts.clone()),
            }),
            default_network: Some(self.default_network.clone()),
            networks: self.networks.clone(),
            mocha: Some(PartialMocha {
                timeout: i64::try_from(self.mocha.timeout_ms).ok(),
            }),
        }
    }
}
