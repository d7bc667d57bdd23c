//! Environment variable overrides: ZKCONF_DEFAULT_NETWORK and ZKCONF_MOCHA_TIMEOUT.

use crate::config::{PartialConfig, PartialMocha};
use crate::error::ConfigError;
use config::{Config, Environment};

/// Prefix shared by every zkconf environment variable.
pub const ENV_PREFIX: &str = "ZKCONF";

/// Read overrides from the process environment.
pub fn read() -> Result<PartialConfig, ConfigError> {
    read_from(Environment::with_prefix(ENV_PREFIX))
}

pub(crate) fn read_from(source: Environment) -> Result<PartialConfig, ConfigError> {
    let settings = Config::builder().add_source(source).build()?;

    let default_network = optional(settings.get_string("default_network"))?;
    let timeout = optional(settings.get_int("mocha_timeout"))?;

    Ok(PartialConfig {
        default_network,
        mocha: timeout.map(|ms| PartialMocha { timeout: Some(ms) }),
        ..PartialConfig::default()
    })
}

fn optional<T>(value: Result<T, config::ConfigError>) -> Result<Option<T>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
