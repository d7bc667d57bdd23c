//! Built-in defaults, used for every key the project leaves unset.

use crate::config::{
    CompilerSource, CompilerSpec, NetworkSpec, PartialConfig, PartialMocha, PartialPaths,
    PartialSolidity, PartialZksolc, IN_PROCESS_NETWORK,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub(crate) const DEFAULT_SOLC_VERSION: &str = "0.8.15";
pub(crate) const DEFAULT_MOCHA_TIMEOUT_MS: i64 = 40_000;

/// The defaults object every resolution starts from.
pub fn builtin_defaults() -> PartialConfig {
    let mut networks = BTreeMap::new();
    networks.insert(
        IN_PROCESS_NETWORK.to_string(),
        NetworkSpec {
            allow_unlimited_contract_size: Some(false),
            ..NetworkSpec::default()
        },
    );

    PartialConfig {
        zksolc: Some(PartialZksolc {
            version: Some("latest".to_string()),
            compiler_source: Some(CompilerSource::Binary),
        }),
        solidity: Some(PartialSolidity {
            compilers: Some(vec![CompilerSpec::new(DEFAULT_SOLC_VERSION, false, 200)]),
        }),
        paths: Some(PartialPaths {
            sources: Some(PathBuf::from("./contracts")),
            tests: Some(PathBuf::from("./test")),
            cache: Some(PathBuf::from("./cache")),
            artifacts: Some(PathBuf::from("./artifacts")),
        }),
        default_network: Some(IN_PROCESS_NETWORK.to_string()),
        networks,
        mocha: Some(PartialMocha {
            timeout: Some(DEFAULT_MOCHA_TIMEOUT_MS),
        }),
    }
}
