//! Configuration System
//!
//! Reads the project's build configuration (compiler list, optimizer settings, network
//! endpoints and path conventions), merges it with built-in defaults and validates the
//! merged result into an immutable [`ResolvedConfig`].
//!
//! The file schema uses the toolchain's camelCase keys:
//!
//! ```toml
//! defaultNetwork = "zkSyncTestnet"
//!
//! [zksolc]
//! version = "latest"
//! compilerSource = "binary"
//!
//! [[solidity.compilers]]
//! version = "0.8.15"
//! optimizerEnabled = true
//! optimizerRuns = 200
//!
//! [networks.zkSyncTestnet]
//! zksync = true
//! ethNetwork = "sepolia"
//! url = "https://sepolia.era.zksync.io"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

mod facade;
mod merge;
mod resolved;
mod resolver;
mod sources;
mod validate;

pub use facade::{ConfigLoader, LoadOptions};
pub use merge::builtin_defaults;
pub use resolved::{
    MochaSpec, OptimizerSettings, PathSpec, ResolvedCompiler, ResolvedConfig, ZksolcSpec,
    ZksolcVersion,
};
pub use resolver::{resolve, ConfigResolver};
pub use sources::{env_overrides, global_file, parse_file, workspace_file};

/// Name of the in-process development network, the only network allowed without a URL.
pub const IN_PROCESS_NETWORK: &str = "hardhat";

/// A user-supplied configuration. Every section is optional; anything left unset is taken
/// from the resolver's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialConfig {
    /// zkSync compiler binary settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zksolc: Option<PartialZksolc>,

    /// Solidity compiler list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solidity: Option<PartialSolidity>,

    /// Project path conventions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PartialPaths>,

    /// Key into `networks` used when no network is selected explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network: Option<String>,

    /// Named network endpoints, merged by key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, NetworkSpec>,

    /// Test runner settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mocha: Option<PartialMocha>,
}

impl PartialConfig {
    /// Whether no section is set at all.
    pub fn is_empty(&self) -> bool {
        *self == PartialConfig::default()
    }
}

/// How the zkSync compiler binary is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerSource {
    #[default]
    Binary,
    Docker,
}

impl std::fmt::Display for CompilerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerSource::Binary => write!(f, "binary"),
            CompilerSource::Docker => write!(f, "docker"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialZksolc {
    /// `latest` or an exact semantic version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_source: Option<CompilerSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialSolidity {
    /// Replaces the default compiler list wholesale when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilers: Option<Vec<CompilerSpec>>,
}

/// One declared compiler. List order is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompilerSpec {
    pub version: String,

    #[serde(default)]
    pub optimizer_enabled: bool,

    /// Signed so that negative input reaches validation instead of failing to parse
    #[serde(default = "default_optimizer_runs")]
    pub optimizer_runs: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer_details: Option<OptimizerDetails>,
}

pub(crate) fn default_optimizer_runs() -> i64 {
    200
}

impl CompilerSpec {
    pub fn new(version: impl Into<String>, optimizer_enabled: bool, optimizer_runs: i64) -> Self {
        Self {
            version: version.into(),
            optimizer_enabled,
            optimizer_runs,
            optimizer_details: None,
        }
    }
}

/// Optimizer detail switches passed through to the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptimizerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yul: Option<bool>,
}

/// Path overrides. A field set to an empty string stays empty and fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialPaths {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialMocha {
    /// Milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

/// A named remote endpoint. The name is the key in the `networks` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Filled from the map key during resolution
    #[serde(skip)]
    pub name: String,

    /// JSON-RPC endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Whether this is a zkSync network
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub zksync: bool,

    /// The L1 network: a network name from the same map, or an RPC URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_network: Option<String>,

    /// Contract verification endpoint
    #[serde(
        default,
        rename = "verifyURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub verify_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unlimited_contract_size: Option<bool>,

    /// Plugin-specific keys, carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NetworkSpec {
    /// A remote network reachable at `url`.
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// A zkSync network settling on `eth_network`.
    pub fn zksync(url: impl Into<String>, eth_network: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            zksync: true,
            eth_network: Some(eth_network.into()),
            ..Self::default()
        }
    }
}
