//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for values that can be rendered in every output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => json::format_json(self),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    println!("{}", data.format(format)?);
    Ok(())
}
