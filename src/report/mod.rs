//! Contract size reports
//!
//! A report maps contract names to four integer metrics. Reports are parsed
//! strictly: every record must carry all four fields as integers (numeric
//! strings are coerced) and sizes must be positive.

pub mod error;
pub mod loader;
pub mod snapshot;

pub use error::ReportError;
pub use loader::{parse_report, ReportLoader};
pub use snapshot::{Field, FieldViolation, MetricRecord, Snapshot};
