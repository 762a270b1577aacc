//! JSON output formatting

use serde::Serialize;

use crate::error::Result;

/// Pretty-print any serializable value
pub fn format_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
