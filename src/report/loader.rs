//! JSON report parsing and validation

use super::error::ReportError;
use super::snapshot::{Field, MetricRecord, Snapshot};
use crate::infra::FileSystem;
use serde_json::{Map, Value};
use std::path::Path;

/// Reads size reports through a [`FileSystem`]
pub struct ReportLoader<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> ReportLoader<FS> {
    /// Create a new report loader
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Read and validate the report at `path`
    pub fn load(&self, path: &Path) -> Result<Snapshot, ReportError> {
        let contents = self
            .fs
            .read_to_string(path)
            .map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let snapshot = parse_report(&contents)?;
        log::debug!(
            "Loaded {} contracts from {}",
            snapshot.len(),
            path.display()
        );
        Ok(snapshot)
    }
}

/// Parse report JSON into a snapshot, keeping document key order
///
/// # Examples
///
/// ```
/// use contract_size_diff::report::parse_report;
///
/// let snapshot = parse_report(r#"{
///     "Counter": {"runtime_size": 250, "init_size": "310", "runtime_margin": 24326, "init_margin": 48842}
/// }"#).unwrap();
/// assert_eq!(snapshot.get("Counter").unwrap().init_size(), 310);
///
/// let err = parse_report(r#"{"Counter": {"runtime_size": 250}}"#).unwrap_err();
/// assert!(err.to_string().contains("init_size"));
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid JSON
/// - The top level or any record is not a JSON object
/// - A record is missing a field, holds a non-integer, or has a non-positive size
pub fn parse_report(json: &str) -> Result<Snapshot, ReportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(contracts) = value else {
        return Err(ReportError::NotAnObject {
            location: "at the top level".to_string(),
            found: json_type(&value),
        });
    };

    let mut snapshot = Snapshot::new();
    for (contract, record) in contracts {
        let record = parse_record(&contract, &record)?;
        snapshot.insert(contract, record);
    }
    Ok(snapshot)
}

fn parse_record(contract: &str, value: &Value) -> Result<MetricRecord, ReportError> {
    let Value::Object(fields) = value else {
        return Err(ReportError::NotAnObject {
            location: format!("for contract '{}'", contract),
            found: json_type(value),
        });
    };

    let malformed = |field: Field, reason: String| ReportError::MalformedRecord {
        contract: contract.to_string(),
        field,
        reason,
    };

    let [runtime_size, init_size, runtime_margin, init_margin] = Field::ALL
        .map(|field| read_field(fields, field).map_err(|reason| malformed(field, reason)));

    MetricRecord::new(runtime_size?, init_size?, runtime_margin?, init_margin?)
        .map_err(|violation| malformed(violation.field, violation.reason))
}

fn read_field(fields: &Map<String, Value>, field: Field) -> Result<i64, String> {
    let value = fields
        .get(field.key())
        .ok_or_else(|| "is missing".to_string())?;
    let number = coerce_integer(value)
        .ok_or_else(|| format!("must be an integer, got {}", describe(value)))?;

    if field.is_size() && number <= 0 {
        return Err(format!("must be a positive integer, got {}", number));
    }
    Ok(number)
}

/// Accept JSON integers, integral floats, and base-10 integer strings
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        other => json_type(other).to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::RealFileSystem;
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "ACLManager": {"runtime_size": 3493, "init_size": 4108, "runtime_margin": 21083, "init_margin": 45044},
        "ATokenInstance": {"runtime_size": 10162, "init_size": 11059, "runtime_margin": 14414, "init_margin": 38093}
    }"#;

    #[test]
    fn test_parse_report_keeps_document_order() {
        let snapshot = parse_report(
            r#"{"Zeta": {"runtime_size": 1, "init_size": 1, "runtime_margin": 0, "init_margin": 0},
                "Alpha": {"runtime_size": 2, "init_size": 2, "runtime_margin": 0, "init_margin": 0}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = snapshot.keys().collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_parse_report_reads_all_fields() {
        let snapshot = parse_report(REPORT).unwrap();
        let acl = snapshot.get("ACLManager").unwrap();
        assert_eq!(acl.runtime_size(), 3493);
        assert_eq!(acl.init_size(), 4108);
        assert_eq!(acl.runtime_margin(), 21083);
        assert_eq!(acl.init_margin(), 45044);
    }

    #[test]
    fn test_parse_report_coerces_numeric_strings_and_integral_floats() {
        let snapshot = parse_report(
            r#"{"A": {"runtime_size": "100", "init_size": 200.0, "runtime_margin": " -5 ", "init_margin": 7}}"#,
        )
        .unwrap();
        let rec = snapshot.get("A").unwrap();
        assert_eq!(rec.runtime_size(), 100);
        assert_eq!(rec.init_size(), 200);
        assert_eq!(rec.runtime_margin(), -5);
    }

    #[test]
    fn test_parse_report_ignores_unknown_fields() {
        let snapshot = parse_report(
            r#"{"A": {"runtime_size": 1, "init_size": 2, "runtime_margin": 3, "init_margin": 4, "extra": true}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_parse_report_accepts_empty_object() {
        assert!(parse_report("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_report_rejects_missing_field() {
        let err = parse_report(
            r#"{"A": {"runtime_size": 1, "init_size": 2, "runtime_margin": 3}}"#,
        )
        .unwrap_err();
        match err {
            ReportError::MalformedRecord {
                contract,
                field,
                reason,
            } => {
                assert_eq!(contract, "A");
                assert_eq!(field, Field::InitMargin);
                assert_eq!(reason, "is missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_report_rejects_non_numeric_values() {
        for bad in [r#""abc""#, "1.5", "true", "null", "[1]", "{}"] {
            let json = format!(
                r#"{{"A": {{"runtime_size": 1, "init_size": {bad}, "runtime_margin": 3, "init_margin": 4}}}}"#
            );
            let err = parse_report(&json).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("init_size"), "{msg}");
            assert!(msg.contains("must be an integer"), "{msg}");
            assert_eq!(err.contract(), Some("A"));
        }
    }

    #[test]
    fn test_parse_report_rejects_non_positive_sizes() {
        let err = parse_report(
            r#"{"A": {"runtime_size": 0, "init_size": 2, "runtime_margin": 3, "init_margin": 4}}"#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("runtime_size"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_parse_report_reports_first_bad_field_in_column_order() {
        let err = parse_report(
            r#"{"A": {"runtime_size": "x", "init_size": "y"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("`runtime_size`"));
    }

    #[test]
    fn test_parse_report_checks_positivity_in_column_order() {
        let err = parse_report(
            r#"{"A": {"runtime_size": 0, "init_size": "x", "runtime_margin": 3, "init_margin": 4}}"#,
        )
        .unwrap_err();
        match err {
            ReportError::MalformedRecord { field, reason, .. } => {
                assert_eq!(field, Field::RuntimeSize);
                assert!(reason.contains("positive"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_report_rejects_non_object_shapes() {
        let err = parse_report("[1, 2]").unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject { found: "array", .. }));

        let err = parse_report(r#"{"A": 5}"#).unwrap_err();
        assert!(err.to_string().contains("contract 'A'"));
    }

    #[test]
    fn test_parse_report_rejects_invalid_json() {
        let err = parse_report("{not json").unwrap_err();
        assert!(matches!(err, ReportError::InvalidJson(_)));
    }

    #[test]
    fn test_loader_reads_from_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sizes.json");
        std::fs::write(&path, REPORT).unwrap();

        let snapshot = ReportLoader::new(RealFileSystem).load(&path).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_loader_wraps_io_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = ReportLoader::new(RealFileSystem).load(&path).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
