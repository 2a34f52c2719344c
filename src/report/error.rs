//! Error types for report loading

use super::snapshot::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and validating a size report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file could not be read
    #[error("failed to read report {}", path.display())]
    Io {
        /// Report path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Report is not JSON
    #[error("report is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// Top level (or a record) is not a JSON object
    #[error("expected a JSON object {location}, found {found}")]
    NotAnObject {
        /// Where the object was expected
        location: String,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// A record is missing a field or holds an invalid value
    #[error("malformed record for contract '{contract}': field `{field}` {reason}")]
    MalformedRecord {
        /// Contract name
        contract: String,
        /// Offending field
        field: Field,
        /// What is wrong with it
        reason: String,
    },
}

impl ReportError {
    /// Contract name for record-level errors
    pub fn contract(&self) -> Option<&str> {
        match self {
            Self::MalformedRecord { contract, .. } => Some(contract),
            _ => None,
        }
    }
}
