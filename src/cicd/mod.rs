//! CI/CD integration
//!
//! Provides:
//! - Detection of contracts that exceed their size limits
//! - GitHub Actions step outputs
//! - JSON output for other CI tools

pub mod budget;
pub mod output;

pub use budget::{exceeded_contracts, find_violations, BudgetViolation};
pub use output::{GithubOutput, JsonOutput};
