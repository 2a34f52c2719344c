//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```no_run
//! use contract_size_diff::cmd::compare::{cmd_compare, CompareOptions};
//! use contract_size_diff::error::ErrorFormatter;
//!
//! if let Err(e) = cmd_compare("base.json", "head.json", &CompareOptions::default()) {
//!     eprintln!("{}", ErrorFormatter::format(&e));
//!     std::process::exit(ErrorFormatter::exit_code(&e));
//! }
//! ```

use crate::report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// contract-size-diff errors with contextual suggestions
#[derive(Error, Debug)]
pub enum SizeDiffError {
    /// Input report does not exist
    #[error("{role} report not found: {}", path.display())]
    ReportNotFound {
        /// "Baseline" or "Comparison"
        role: &'static str,
        /// Path that was given
        path: PathBuf,
    },

    /// Input report could not be read or validated
    #[error("invalid report {}", path.display())]
    InvalidReport {
        /// Report path
        path: PathBuf,
        #[source]
        /// What was wrong with it
        source: ReportError,
    },

    /// Contracts in the new report exceed their size limits
    #[error("{} contract(s) exceed the size limit: {}", contracts.len(), contracts.join(", "))]
    BudgetExceeded {
        /// Offending contract names, in report order
        contracts: Vec<String>,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizeDiffError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_size_diff::error::SizeDiffError;
    ///
    /// let error = SizeDiffError::BudgetExceeded {
    ///     contracts: vec!["Pool".to_string()],
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("Pool"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ReportNotFound { role, .. } if *role == "Baseline" => Some(
                "Generate the baseline on the target branch first, e.g. \
                 `forge build --sizes --json > base.json`"
                    .to_string(),
            ),
            Self::ReportNotFound { .. } => Some(
                "Generate the report for this change, e.g. `forge build --sizes --json > head.json`"
                    .to_string(),
            ),
            Self::InvalidReport {
                source: ReportError::Io { .. },
                ..
            } => None,
            Self::InvalidReport { source, .. } => Some(match source.contract() {
                Some(contract) => format!(
                    "Every contract (including '{}') needs integer runtime_size, init_size, \
                     runtime_margin and init_margin fields",
                    contract
                ),
                None => "Reports must be a JSON object mapping contract names to size records"
                    .to_string(),
            }),
            Self::BudgetExceeded { contracts } => Some(format!(
                "Reduce the bytecode of {} below the limit, e.g. by splitting logic into \
                 libraries or enabling the optimizer",
                contracts.join(", ")
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_size_diff::error::SizeDiffError;
    ///
    /// let error = SizeDiffError::ReportNotFound {
    ///     role: "Baseline",
    ///     path: "base.json".into(),
    /// };
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    ///
    /// let budget_error = SizeDiffError::BudgetExceeded { contracts: vec![] };
    /// assert_eq!(budget_error.exit_code(), 1); // CI should fail
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReportNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidReport {
                source: ReportError::Io { .. },
                ..
            } => 74, // EX_IOERR
            Self::InvalidReport { .. } => 65,  // EX_DATAERR
            Self::BudgetExceeded { .. } => 1,  // Generic error (CI should fail)
            Self::Io { .. } => 74,             // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::find(error).and_then(SizeDiffError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, SizeDiffError::exit_code)
    }

    /// First [`SizeDiffError`] in the chain, skipping context layers
    fn find(error: &anyhow::Error) -> Option<&SizeDiffError> {
        error.chain().find_map(|e| e.downcast_ref::<SizeDiffError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;
    use anyhow::Context;

    fn malformed() -> SizeDiffError {
        let source = parse_report(r#"{"Pool": {"runtime_size": 1}}"#).unwrap_err();
        SizeDiffError::InvalidReport {
            path: "head.json".into(),
            source,
        }
    }

    #[test]
    fn test_report_not_found_message_names_role_and_path() {
        let err = SizeDiffError::ReportNotFound {
            role: "Comparison",
            path: "/tmp/head.json".into(),
        };
        assert_eq!(err.to_string(), "Comparison report not found: /tmp/head.json");
        assert!(err.suggestion().unwrap().contains("head.json"));
    }

    #[test]
    fn test_budget_exceeded_lists_contracts() {
        let err = SizeDiffError::BudgetExceeded {
            contracts: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "2 contract(s) exceed the size limit: A, B"
        );
    }

    #[test]
    fn test_malformed_record_suggestion_names_contract() {
        let err = malformed();
        assert!(err.suggestion().unwrap().contains("'Pool'"));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_shape_error_suggestion_describes_report_layout() {
        let err = SizeDiffError::InvalidReport {
            path: "head.json".into(),
            source: parse_report("[1]").unwrap_err(),
        };
        assert!(err.suggestion().unwrap().contains("JSON object"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let io = SizeDiffError::Io {
            context: "writing report".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(io.exit_code(), 74);

        let unreadable = SizeDiffError::InvalidReport {
            path: "dir".into(),
            source: ReportError::Io {
                path: "dir".into(),
                source: std::io::Error::other("is a directory"),
            },
        };
        assert_eq!(unreadable.exit_code(), 74);
    }

    #[test]
    fn test_formatter_prints_cause_chain_and_help() {
        let error = anyhow::Error::new(malformed());
        let formatted = ErrorFormatter::format(&error);

        assert!(formatted.contains("invalid report head.json"));
        assert!(formatted.contains("caused by:"));
        assert!(formatted.contains("init_size"));
        assert!(formatted.contains("help:"));
    }

    #[test]
    fn test_formatter_finds_error_beneath_context() {
        let error = Err::<(), _>(SizeDiffError::BudgetExceeded {
            contracts: vec!["X".to_string()],
        })
        .context("comparing reports")
        .unwrap_err();

        assert_eq!(ErrorFormatter::exit_code(&error), 1);
        assert!(ErrorFormatter::format(&error).contains("help:"));
    }

    #[test]
    fn test_formatter_defaults_for_foreign_errors() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&error), 1);
        assert!(!ErrorFormatter::format(&error).contains("help:"));
    }
}
