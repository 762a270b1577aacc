//! Common display utilities

use chrono::{DateTime, Utc};

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Format a timestamp as a plain date (YYYY-MM-DD)
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Render a yes/no cell
pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}
