//! Merge rules: built-in defaults and how one partial configuration is laid over another.

mod defaults;
mod merge_policy;

pub use defaults::builtin_defaults;
