//! Markdown document for a diff result

use super::table::{format_header, format_rule, Alignment};
use crate::diff::DiffResult;
use crate::fmt::{HEADING_GLYPH, MUTED_GLYPH};

/// Column titles of both tables
pub const COLUMNS: [&str; 5] = [
    "Contract",
    "Runtime Size (B)",
    "Initcode Size (B)",
    "Runtime Margin (B)",
    "Initcode Margin (B)",
];

/// Name column left aligned, metric columns right aligned
const ALIGNMENTS: [Alignment; 5] = [
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// Render the diff as a markdown comment body
///
/// Changed, removed and added rows share the primary table, in that order.
/// Unchanged rows go into a collapsed `<details>` block. Empty sections are
/// left out entirely.
///
/// # Examples
///
/// ```
/// use contract_size_diff::diff::DiffResult;
/// use contract_size_diff::markdown::format_diff_md;
///
/// let diff = DiffResult::default();
/// assert_eq!(format_diff_md("Sizes", &diff), "### ♻️ Sizes");
/// ```
pub fn format_diff_md(heading: &str, diff: &DiffResult) -> String {
    let header = format_header(&COLUMNS);
    let rule = format_rule(&ALIGNMENTS);

    let mut lines = vec![format!("### {} {}", HEADING_GLYPH, heading)];

    if diff.has_changes() {
        lines.push(header.clone());
        lines.push(rule.clone());
        lines.extend(diff.changed.iter().cloned());
        lines.extend(diff.removed.iter().cloned());
        lines.extend(diff.added.iter().cloned());
    }

    if !diff.unchanged.is_empty() {
        lines.push(String::new());
        lines.push(format!("<details><summary>{} Unchanged</summary>", MUTED_GLYPH));
        lines.push(String::new());
        lines.push(header);
        lines.push(rule);
        lines.extend(diff.unchanged.iter().cloned());
        lines.push("</details>".to_string());
    }

    lines.join("\n")
}

/// Hidden HTML comment identifying reports rendered for `heading`
///
/// A comment poster can search existing comments for this line to update its
/// previous report instead of posting a new one.
pub fn comment_marker(heading: &str) -> String {
    // "--" may not appear inside an HTML comment; runs of dashes need repeated passes
    let mut escaped = heading.to_string();
    while escaped.contains("--") {
        escaped = escaped.replace("--", "- -");
    }
    format!("<!-- contract-size-diff: {} -->", escaped)
}
