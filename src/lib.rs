//! zkconf: build-configuration resolver for zkSync smart-contract toolchains
//!
//! Reads the project's declarative build configuration, merges it with built-in defaults,
//! validates the merged result and hands out an immutable [`config::ResolvedConfig`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{resolve, ConfigLoader, ConfigResolver, PartialConfig, ResolvedConfig};
pub use error::{ConfigError, ValidationError, ValidationErrors};
