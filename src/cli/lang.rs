//! Display-language preference commands
//!
//! The language travels with the config file next to the token, but unlike
//! the token it survives logout.

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::notify;

/// Run the lang set command
pub fn set(opts: &GlobalOptions, code: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.preferences.language = Some(code.to_string());
    config.save_at(opts.config_ref())?;

    notify::success(&format!("Display language set to {}", code));
    Ok(())
}

/// Run the lang get command
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    println!(
        "{}",
        config.preferences.language.as_deref().unwrap_or("en")
    );
    Ok(())
}
