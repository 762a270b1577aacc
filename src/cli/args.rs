//! Shared CLI argument types

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags into a single unit so handler signatures
/// stay small; new global options only touch this struct and `main.rs`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom API host (overrides config file and the production default)
    pub api_host: Option<String>,

    /// Custom config file path (defaults to ~/.picshare/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Capture global flags from the parsed CLI
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_host: cli.api_host.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get API host override as `Option<&str>`
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Get config path as `Option<&str>`
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
