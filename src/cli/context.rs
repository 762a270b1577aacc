//! Command execution context
//!
//! Unified setup for data commands: load config, build the session, run
//! startup resolution, and construct the gateway the command will use.

use std::sync::Arc;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::Gateway;
use crate::client::models::Identity;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::Session;

/// Shared state for a single command invocation
pub struct CommandContext {
    /// Resolved session (authenticated or anonymous)
    pub session: Arc<Session>,
    /// Gateway for all data operations
    pub gateway: Gateway,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, resolve the session once, and wire up the gateway.
    ///
    /// Resolution never fails the command by itself: a token that cannot be
    /// confirmed just leaves the session anonymous, and commands that need an
    /// identity report that through [`require_identity`](Self::require_identity).
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let session = Arc::new(Session::new(
            config,
            opts.api_host_ref(),
            opts.config_ref(),
        )?);

        session.resolve().await;

        let gateway = Gateway::new(Arc::clone(&session))?;

        Ok(Self {
            session,
            gateway,
            format: opts.format,
        })
    }

    /// Identity of the logged-in user, or a "not logged in" error
    pub async fn require_identity(&self) -> Result<Identity> {
        self.session.identity().await.ok_or(Error::NotLoggedIn)
    }

    /// Identity of the logged-in user if they are an administrator
    pub async fn require_admin(&self) -> Result<Identity> {
        let identity = self.require_identity().await?;
        if !identity.role.is_admin() {
            return Err(Error::AdminRequired);
        }
        Ok(identity)
    }
}
