//! ConfigResolver: partial configuration in, validated [`ResolvedConfig`] out.

use super::validate::validate;
use super::{builtin_defaults, PartialConfig, ResolvedConfig};
use crate::error::ValidationErrors;
use tracing::{debug, info};

/// Merges a partial configuration over a defaults object and validates the result.
///
/// Resolution is a pure function of `(defaults, partial)`: the whole merged object is
/// validated once, after merging, and either every check passes or nothing is returned.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    defaults: PartialConfig,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Resolver over the built-in defaults.
    pub fn new() -> Self {
        Self {
            defaults: builtin_defaults(),
        }
    }

    /// Resolver over a caller-supplied defaults object.
    pub fn with_defaults(defaults: PartialConfig) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &PartialConfig {
        &self.defaults
    }

    pub fn resolve(&self, partial: PartialConfig) -> Result<ResolvedConfig, ValidationErrors> {
        debug!(
            user_networks = partial.networks.len(),
            user_compilers = partial
                .solidity
                .as_ref()
                .and_then(|s| s.compilers.as_ref())
                .map(Vec::len),
            "Merging configuration over defaults"
        );

        let merged = self.defaults.clone().overlay(partial);
        let resolved = validate(merged)?;

        info!(
            compilers = resolved.compilers().len(),
            networks = resolved.networks().len(),
            default_network = resolved.default_network_name(),
            "Configuration resolved"
        );
        Ok(resolved)
    }
}

/// Resolve `partial` over the built-in defaults.
pub fn resolve(partial: PartialConfig) -> Result<ResolvedConfig, ValidationErrors> {
    ConfigResolver::new().resolve(partial)
}
