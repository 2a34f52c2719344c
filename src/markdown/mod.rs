//! Markdown rendering for pull request comments

pub mod render;
pub mod table;

pub use render::{comment_marker, format_diff_md, COLUMNS};
pub use table::{format_header, format_row, format_rule, Alignment, Cell};
