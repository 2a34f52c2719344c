//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Binary invocation in an isolated working directory
//! - Report fixtures

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// Command for the contract-size-diff binary, run inside `dir`
///
/// Running in a temp directory keeps a stray `.contract-size-diff.toml`
/// from leaking into tests.
#[allow(dead_code)]
pub fn bin_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_contract-size-diff"));
    cmd.current_dir(dir).env_remove("GITHUB_OUTPUT");
    cmd
}
