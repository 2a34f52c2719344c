#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! contract-size-diff library
//!
//! Compares two contract size reports and renders the difference as a
//! markdown comment, for surfacing bytecode size regressions in pull requests.
//!
//! # Basic Example
//!
//! ```
//! use contract_size_diff::diff::snapshot_diff;
//! use contract_size_diff::markdown::format_diff_md;
//! use contract_size_diff::report::parse_report;
//!
//! let before = parse_report(r#"{
//!     "Vault": {"runtime_size": 1000, "init_size": 1200, "runtime_margin": 23576, "init_margin": 47952}
//! }"#)?;
//! let after = parse_report(r#"{
//!     "Vault": {"runtime_size": 1000, "init_size": 1200, "runtime_margin": 23576, "init_margin": 47952},
//!     "Router": {"runtime_size": 2048, "init_size": 2300, "runtime_margin": 22528, "init_margin": 46852}
//! }"#)?;
//!
//! let diff = snapshot_diff(&before, &after);
//! assert_eq!(diff.added, vec!["| +Router | 2,048 | 2,300 | 22,528 | 46,852 |"]);
//!
//! let markdown = format_diff_md("Contract sizes", &diff);
//! assert!(markdown.starts_with("### ♻️ Contract sizes"));
//! assert!(markdown.contains("<details><summary>🔕 Unchanged</summary>"));
//! # Ok::<(), contract_size_diff::report::ReportError>(())
//! ```
//!
//! # Advanced Example: Size Limit Enforcement
//!
//! ```
//! use contract_size_diff::cicd::exceeded_contracts;
//! use contract_size_diff::report::parse_report;
//!
//! let after = parse_report(r#"{
//!     "Pool": {"runtime_size": 25000, "init_size": 26000, "runtime_margin": -424, "init_margin": 23152}
//! }"#)?;
//! assert_eq!(exceeded_contracts(&after), vec!["Pool"]);
//! # Ok::<(), contract_size_diff::report::ReportError>(())
//! ```

/// CI/CD integration tooling
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Snapshot comparison and diffing
pub mod diff;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Markdown rendering
pub mod markdown;
/// Size report model and loading
pub mod report;
