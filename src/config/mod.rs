//! Configuration management for the PicShare CLI
//!
//! The config file is the single piece of durable client state: it holds the
//! credential token (with its decoded expiry) and the user's preferences.
//! Logout removes the token and nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration, persisted as YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API host override (defaults to the production API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Credential token from the last successful login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<StoredToken>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Persisted credential token with its embedded expiry, decoded at login time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    /// The bearer token string
    pub token: String,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected display language (e.g. "en", "de")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".picshare").join("config.yaml"))
    }

    /// Resolve the config path, honoring an explicit override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from the given path, or the default location.
    ///
    /// A missing file is not an error: commands like `login` run before any
    /// configuration exists, so this returns the default config instead.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the given path, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The token is a credential; keep the file private on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Check whether the stored token's embedded expiry has passed
    pub fn is_token_expired(&self) -> bool {
        match &self.token {
            None => true,
            Some(stored) => stored.expires_at <= Utc::now(),
        }
    }

    /// Remove the credential token, leaving preferences untouched
    pub fn clear_token(&mut self) {
        self.token = None;
    }
}
