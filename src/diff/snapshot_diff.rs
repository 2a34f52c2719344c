//! Snapshot diffing into formatted table rows

use super::compare::{compare_snapshots, ChangeHandler};
use crate::fmt::{
    format_number, ADDED_MARKER, CHANGED_MARKER, DOWN_ARROW, REMOVED_MARKER, UP_ARROW,
};
use crate::markdown::table::{format_row, Cell};
use crate::report::{Field, MetricRecord, Snapshot};
use serde::Serialize;

/// Classification of a contract between two reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Only in the new report
    Added,
    /// Only in the old report
    Removed,
    /// In both, with different metrics
    Changed,
    /// In both, with identical metrics
    Unchanged,
}

impl Status {
    /// Marker glyph prepended to the contract name
    pub fn marker(self) -> &'static str {
        match self {
            Self::Added => ADDED_MARKER,
            Self::Removed => REMOVED_MARKER,
            Self::Changed => CHANGED_MARKER,
            Self::Unchanged => "",
        }
    }
}

/// Whether a metric grew or shrank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// After is greater than before
    Up,
    /// After is less than before
    Down,
}

impl Direction {
    /// Arrow glyph
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => UP_ARROW,
            Self::Down => DOWN_ARROW,
        }
    }

    /// Algebraic sign of the change
    pub fn sign(self) -> char {
        match self {
            Self::Up => '+',
            Self::Down => '-',
        }
    }
}

/// Relative change against the old value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percent {
    /// Rounded whole percentage
    Finite(u128),
    /// Old value was zero, so no ratio exists
    Unbounded,
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(p) => write!(f, "{}%", p),
            Self::Unbounded => f.write_str("∞%"),
        }
    }
}

/// Change of a single metric between two records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDelta {
    /// Old value
    pub before: i64,
    /// New value
    pub after: i64,
    /// Absolute difference
    pub delta: u64,
    /// Difference relative to `|before|`
    pub percent: Percent,
    /// Growth or shrinkage
    pub direction: Direction,
}

impl FieldDelta {
    /// Compute the change from `before` to `after`, or `None` when equal
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_size_diff::diff::{Direction, FieldDelta, Percent};
    ///
    /// let delta = FieldDelta::between(100, 80).unwrap();
    /// assert_eq!(delta.delta, 20);
    /// assert_eq!(delta.percent, Percent::Finite(20));
    /// assert_eq!(delta.direction, Direction::Down);
    /// assert_eq!(delta.direction.sign(), '-');
    ///
    /// assert!(FieldDelta::between(5, 5).is_none());
    /// ```
    pub fn between(before: i64, after: i64) -> Option<Self> {
        if before == after {
            return None;
        }

        let delta = before.abs_diff(after);
        Some(Self {
            before,
            after,
            delta,
            percent: round_percent(delta, before.unsigned_abs()),
            direction: if after > before {
                Direction::Up
            } else {
                Direction::Down
            },
        })
    }

    /// Cell text: `<sup>↓3% (-107)</sup> 4,001`
    pub fn annotate(&self) -> String {
        format!(
            "<sup>{}{} ({}{})</sup> {}",
            self.direction.arrow(),
            self.percent,
            self.direction.sign(),
            format_number(self.delta),
            format_number(self.after)
        )
    }
}

/// Round `delta / base * 100` half up using exact integer arithmetic
fn round_percent(delta: u64, base: u64) -> Percent {
    if base == 0 {
        return Percent::Unbounded;
    }
    let (delta, base) = (u128::from(delta), u128::from(base));
    Percent::Finite((200 * delta + base) / (2 * base))
}

/// One metric cell of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerdict {
    /// Value shown as is
    Plain(i64),
    /// Value shown with a change annotation
    Changed(FieldDelta),
}

impl FieldVerdict {
    fn to_cell(self) -> Cell {
        match self {
            Self::Plain(value) => Cell::Number(value),
            Self::Changed(delta) => Cell::Text(delta.annotate()),
        }
    }
}

/// Per-contract classification plus the cells of its table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Contract name, undecorated
    pub key: String,
    /// Classification
    pub status: Status,
    /// Metric cells in column order
    pub fields: [FieldVerdict; 4],
}

impl Verdict {
    fn plain(key: &str, status: Status, record: &MetricRecord) -> Self {
        Self {
            key: key.to_string(),
            status,
            fields: Field::ALL.map(|field| FieldVerdict::Plain(record.value(field))),
        }
    }

    fn changed(key: &str, before: &MetricRecord, after: &MetricRecord) -> Self {
        Self {
            key: key.to_string(),
            status: Status::Changed,
            fields: Field::ALL.map(|field| {
                let after_value = after.value(field);
                match FieldDelta::between(before.value(field), after_value) {
                    Some(delta) => FieldVerdict::Changed(delta),
                    None => FieldVerdict::Plain(after_value),
                }
            }),
        }
    }

    /// Contract name with its status marker
    pub fn decorated_key(&self) -> String {
        format!("{}{}", self.status.marker(), self.key)
    }

    /// Markdown table row for this verdict
    pub fn to_row(&self) -> String {
        let mut cells = Vec::with_capacity(1 + self.fields.len());
        cells.push(Cell::Text(self.decorated_key()));
        cells.extend(self.fields.iter().map(|field| field.to_cell()));
        format_row(&cells)
    }
}

/// Formatted table rows grouped by classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Rows for contracts only in the new report
    pub added: Vec<String>,
    /// Rows for contracts only in the old report
    pub removed: Vec<String>,
    /// Rows for contracts whose metrics changed
    pub changed: Vec<String>,
    /// Rows for contracts whose metrics are identical
    pub unchanged: Vec<String>,
}

impl DiffResult {
    /// Number of added, removed and changed rows
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// True if anything was added, removed or changed
    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }
}

impl ChangeHandler<MetricRecord> for DiffResult {
    fn on_added(&mut self, key: &str, after: &MetricRecord) {
        self.added.push(Verdict::plain(key, Status::Added, after).to_row());
    }

    fn on_removed(&mut self, key: &str, before: &MetricRecord) {
        self.removed.push(Verdict::plain(key, Status::Removed, before).to_row());
    }

    fn on_changed(&mut self, key: &str, before: &MetricRecord, after: &MetricRecord) {
        self.changed.push(Verdict::changed(key, before, after).to_row());
    }

    fn on_unchanged(&mut self, key: &str, before: &MetricRecord, _after: &MetricRecord) {
        self.unchanged.push(Verdict::plain(key, Status::Unchanged, before).to_row());
    }
}

/// Diff two reports into formatted table rows
///
/// # Examples
///
/// ```
/// use contract_size_diff::diff::snapshot_diff;
/// use contract_size_diff::report::{MetricRecord, Snapshot};
///
/// let before: Snapshot = [("Vault", MetricRecord::new(1000, 1200, 23576, 47952).unwrap())]
///     .into_iter()
///     .collect();
/// let after: Snapshot = [("Vault", MetricRecord::new(1100, 1200, 23476, 47952).unwrap())]
///     .into_iter()
///     .collect();
///
/// let diff = snapshot_diff(&before, &after);
/// assert_eq!(
///     diff.changed,
///     vec!["| ~Vault | <sup>↑10% (+100)</sup> 1,100 | 1,200 | <sup>↓0% (-100)</sup> 23,476 | 47,952 |"]
/// );
/// ```
pub fn snapshot_diff(before: &Snapshot, after: &Snapshot) -> DiffResult {
    let mut result = DiffResult::default();
    compare_snapshots(before, after, &mut result);

    log::debug!(
        "Diff: {} added, {} removed, {} changed, {} unchanged",
        result.added.len(),
        result.removed.len(),
        result.changed.len(),
        result.unchanged.len()
    );
    result
}
