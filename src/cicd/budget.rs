//! Size limit enforcement for CI/CD
//!
//! A negative field in the new report means the contract no longer fits
//! under its runtime or initcode size limit.

use crate::report::{Field, Snapshot};
use console::style;

/// A contract whose margins went negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetViolation {
    /// Contract name
    pub contract: String,
    /// Fields holding negative values, in column order
    pub fields: Vec<(Field, i64)>,
}

impl BudgetViolation {
    /// Print a colored line describing the violation
    pub fn print(&self) {
        let details: Vec<String> = self
            .fields
            .iter()
            .map(|(field, value)| format!("{} = {}", field, value))
            .collect();
        eprintln!(
            "   {} {} ({})",
            style("✗").red(),
            style(&self.contract).bold(),
            details.join(", ")
        );
    }
}

/// Contracts in `after` with any negative field, in report order
///
/// # Examples
///
/// ```
/// use contract_size_diff::cicd::exceeded_contracts;
/// use contract_size_diff::report::parse_report;
///
/// let after = parse_report(r#"{
///     "Small": {"runtime_size": 100, "init_size": 120, "runtime_margin": 24476, "init_margin": 49032},
///     "Huge": {"runtime_size": 30000, "init_size": 31000, "runtime_margin": -5424, "init_margin": 18152}
/// }"#)?;
/// assert_eq!(exceeded_contracts(&after), vec!["Huge"]);
/// # Ok::<(), contract_size_diff::report::ReportError>(())
/// ```
pub fn exceeded_contracts(after: &Snapshot) -> Vec<&str> {
    after
        .iter()
        .filter(|(_, record)| record.has_negative_field())
        .map(|(name, _)| name)
        .collect()
}

/// Detailed violations for every contract over its limits
pub fn find_violations(after: &Snapshot) -> Vec<BudgetViolation> {
    after
        .iter()
        .filter_map(|(name, record)| {
            let fields: Vec<(Field, i64)> = Field::ALL
                .iter()
                .map(|&field| (field, record.value(field)))
                .filter(|&(_, value)| value < 0)
                .collect();
            (!fields.is_empty()).then(|| BudgetViolation {
                contract: name.to_string(),
                fields,
            })
        })
        .collect()
}
