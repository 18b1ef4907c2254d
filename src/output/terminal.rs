//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// Embedded double quotes are doubled so the field stays valid CSV.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Comment line naming a range, highlighted when `color` is on.
pub fn range_header(begin: &str, end: &str, count: usize, color: bool) -> String {
    let text = format!("# {begin} - {end} ({count} cidrs)");
    if color {
        text.on_blue().to_string()
    } else {
        text
    }
}
