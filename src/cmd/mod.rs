//! Command handlers for the contract-size-diff CLI
//!
//! Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;

pub use compare::{cmd_compare, CompareOptions};
pub use completions::cmd_completions;
