//! Shared formatting utilities for numbers and report glyphs

use console::Emoji;

/// Recycle glyph that prefixes the report heading
pub const HEADING_GLYPH: &str = "♻️";

/// Muted bell glyph for the collapsed unchanged section
pub const MUTED_GLYPH: &str = "🔕";

/// Marker prepended to contracts that only exist in the new report
pub const ADDED_MARKER: &str = "+";

/// Marker prepended to contracts that disappeared from the new report
pub const REMOVED_MARKER: &str = "-";

/// Marker prepended to contracts whose metrics changed
pub const CHANGED_MARKER: &str = "~";

/// Arrow for a metric that grew
pub const UP_ARROW: &str = "↑";

/// Arrow for a metric that shrank
pub const DOWN_ARROW: &str = "↓";

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Format an integer with comma thousands separators (en-US grouping)
///
/// # Examples
///
/// ```
/// use contract_size_diff::fmt::format_number;
///
/// assert_eq!(format_number(10162), "10,162");
/// assert_eq!(format_number(-1_234_567), "-1,234,567");
/// assert_eq!(format_number(999u64), "999");
/// ```
pub fn format_number(value: impl Into<i128>) -> String {
    let value = value.into();
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(3493), "3,493");
        assert_eq!(format_number(45044), "45,044");
        assert_eq!(format_number(123_456), "123,456");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_number_keeps_sign_outside_groups() {
        assert_eq!(format_number(-5), "-5");
        assert_eq!(format_number(-100), "-100");
        assert_eq!(format_number(-1000), "-1,000");
        assert_eq!(format_number(-123_456), "-123,456");
    }

    #[test]
    fn test_format_number_handles_extremes() {
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }
}
