//! Transient user-facing notifications
//!
//! Success, warning, and failure messages printed to stderr so they never mix
//! with table or JSON output on stdout.

use colored::Colorize;

/// Report a successful operation
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Report a non-fatal condition the user should know about
pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Report a failed operation
pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
