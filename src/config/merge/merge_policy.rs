//! Overlay rules. The same rules apply when laying a project file over the defaults and when
//! stacking configuration sources on each other.
//!
//! - `zksolc`, `paths`, `mocha`: field by field, the upper value wins.
//! - `solidity.compilers`: the upper list replaces the lower one wholesale.
//! - `networks`: by key; an upper entry replaces the lower entry of the same name whole.
//! - `defaultNetwork`: the upper value wins.

use crate::config::{PartialConfig, PartialMocha, PartialPaths, PartialSolidity, PartialZksolc};

impl PartialConfig {
    /// Lay `upper` over `self`. Values set in `upper` win; nothing is validated here.
    pub fn overlay(self, upper: PartialConfig) -> PartialConfig {
        let mut networks = self.networks;
        networks.extend(upper.networks);

        PartialConfig {
            zksolc: merge_section(self.zksolc, upper.zksolc, |lower, upper| PartialZksolc {
                version: upper.version.or(lower.version),
                compiler_source: upper.compiler_source.or(lower.compiler_source),
            }),
            solidity: merge_section(self.solidity, upper.solidity, |lower, upper| {
                PartialSolidity {
                    compilers: upper.compilers.or(lower.compilers),
                }
            }),
            paths: merge_section(self.paths, upper.paths, |lower, upper| PartialPaths {
                sources: upper.sources.or(lower.sources),
                tests: upper.tests.or(lower.tests),
                cache: upper.cache.or(lower.cache),
                artifacts: upper.artifacts.or(lower.artifacts),
            }),
            default_network: upper.default_network.or(self.default_network),
            networks,
            mocha: merge_section(self.mocha, upper.mocha, |lower, upper| PartialMocha {
                timeout: upper.timeout.or(lower.timeout),
            }),
        }
    }
}

fn merge_section<T>(lower: Option<T>, upper: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(merge(lower, upper)),
        (lower, upper) => upper.or(lower),
    }
}
