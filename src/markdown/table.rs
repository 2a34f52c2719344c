//! Markdown table fragments
//!
//! Stateless helpers producing one table line each: header, alignment rule,
//! and data row.

use crate::fmt::format_number;

/// Column alignment in a markdown table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left aligned (`:---`)
    #[default]
    Left,
    /// Right aligned (`---:`), used for numeric columns
    Right,
}

impl Alignment {
    fn rule(self) -> &'static str {
        match self {
            Self::Left => ":---",
            Self::Right => "---:",
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Pre-formatted text, emitted verbatim
    Text(String),
    /// Integer, emitted with thousands grouping
    Number(i64),
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => format_number(*n),
        }
    }
}

/// Render a header row: `| col1 | col2 |`
pub fn format_header<S: AsRef<str>>(columns: &[S]) -> String {
    join_cells(columns.iter().map(|c| c.as_ref().to_string()))
}

/// Render the alignment row under a header
///
/// ```
/// use contract_size_diff::markdown::table::{format_rule, Alignment};
///
/// let rule = format_rule(&[Alignment::Left, Alignment::Right]);
/// assert_eq!(rule, "| :--- | ---: |");
/// ```
pub fn format_rule(alignments: &[Alignment]) -> String {
    join_cells(alignments.iter().map(|a| a.rule().to_string()))
}

/// Render a data row, grouping numeric cells and passing text through
pub fn format_row(cells: &[Cell]) -> String {
    join_cells(cells.iter().map(Cell::render))
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
