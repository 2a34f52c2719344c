//! Configuration for contract-size-diff
//!
//! Settings are read from an optional `.contract-size-diff.toml` in the
//! working directory. Command-line flags take precedence.

pub mod file;
pub mod loader;

pub use file::{validate_heading, ConfigFile, CONFIG_FILE_NAME, DEFAULT_HEADING};
pub use loader::ConfigLoader;
