//! Session store
//!
//! Single authoritative holder of authentication state for the process.
//! The lifecycle is `Unresolved -> Anonymous | Authenticated`: every command
//! starts unresolved, examines the persisted token once, and either confirms
//! it against the server or discards it. `Unresolved` is never re-entered.
//!
//! The store owns the persisted credential. Auth endpoints are called
//! directly here (they are the only unauthenticated part of the API surface);
//! all data operations go through the [`Gateway`](crate::client::Gateway),
//! which borrows the token from this store and reports rejected credentials
//! back via [`Session::expire`].

pub mod token;

use chrono::Utc;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use reqwest::header::AUTHORIZATION;
use tokio::sync::RwLock;

use crate::client::http;
use crate::client::models::{
    ForgotPasswordRequest, Identity, LoginRequest, LoginResponse, Registration,
    ResetPasswordRequest,
};
use crate::config::{Config, StoredToken};
use crate::error::{ApiError, Result};
use crate::notify;

/// Authentication lifecycle state
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Startup state, before the persisted token has been examined
    Unresolved,
    /// No identity: the persisted token was absent, expired, or rejected
    Anonymous,
    /// Server-confirmed identity for the stored token
    Authenticated(Identity),
}

struct Inner {
    config: Config,
    state: SessionState,
}

/// Owns the credential token and the resolved identity.
///
/// Identity and token live and die together: there is no state where an
/// identity is held without a stored token, and a token that cannot be
/// resolved to an identity is discarded.
pub struct Session {
    http: HttpClient,
    base_url: String,
    config_path: Option<String>,
    inner: RwLock<Inner>,
}

impl Session {
    /// Create a session over a loaded config.
    ///
    /// `api_host` (flag/env) wins over the config file's `api_host`, which
    /// wins over the production default.
    pub fn new(config: Config, api_host: Option<&str>, config_path: Option<&str>) -> Result<Self> {
        let base_url = api_host
            .map(str::to_string)
            .or_else(|| config.api_host.clone())
            .unwrap_or_else(|| crate::client::DEFAULT_API_HOST.to_string());

        Ok(Self {
            http: http::build_client()?,
            base_url,
            config_path: config_path.map(str::to_string),
            inner: RwLock::new(Inner {
                config,
                state: SessionState::Unresolved,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current identity, if authenticated
    pub async fn identity(&self) -> Option<Identity> {
        match &self.inner.read().await.state {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.identity().await.is_some()
    }

    /// Bearer credential for outbound requests, if one is stored
    pub async fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .config
            .token
            .as_ref()
            .map(|t| t.token.clone())
    }

    /// Stored token with its expiry, for status display
    pub async fn stored_token(&self) -> Option<StoredToken> {
        self.inner.read().await.config.token.clone()
    }

    /// Startup resolution: establish Anonymous or Authenticated from the
    /// persisted token. Runs once per process; later calls are no-ops.
    ///
    /// The embedded expiry is checked locally first, so an expired token is
    /// discarded without a network round trip. Any failure to resolve the
    /// identity (malformed token, network error, server rejection) also
    /// discards the token and completes anonymously.
    pub async fn resolve(&self) {
        let stored = {
            let inner = self.inner.read().await;
            if !matches!(inner.state, SessionState::Unresolved) {
                return;
            }
            inner.config.token.as_ref().map(|t| t.token.clone())
        };

        let Some(stored) = stored else {
            self.set_anonymous().await;
            return;
        };

        match token::decode_expiry(&stored) {
            Ok(expires_at) if expires_at > Utc::now() => {}
            Ok(_) => {
                debug!("stored token has expired, discarding");
                self.discard_token().await;
                return;
            }
            Err(_) => {
                warn!("stored token is malformed, discarding");
                self.discard_token().await;
                return;
            }
        }

        match self.fetch_identity(&stored).await {
            Ok(identity) => {
                debug!("session resolved for {}", identity.email);
                let mut inner = self.inner.write().await;
                inner.state = SessionState::Authenticated(identity);
            }
            Err(err) => {
                debug!("could not resolve identity: {}", err);
                self.discard_token().await;
            }
        }
    }

    /// Log in with email and password.
    ///
    /// On success the returned token is persisted and the identity resolved
    /// from the server. On any failure the prior session state is left
    /// untouched, a failure notification is emitted, and the error is
    /// returned for the caller to react to.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let login: LoginResponse = match self.post_auth("/auth/login", &body).await {
            Ok(response) => response,
            Err(err) => {
                notify::failure(&format!("Login failed: {}", err));
                return Err(err);
            }
        };

        let expires_at = match token::decode_expiry(&login.token) {
            Ok(expires_at) => expires_at,
            Err(err) => {
                notify::failure("Login failed: server returned an unusable token");
                return Err(err);
            }
        };

        {
            let mut inner = self.inner.write().await;
            inner.config.token = Some(StoredToken {
                token: login.token.clone(),
                expires_at,
            });
            inner.config.save_at(self.config_path.as_deref())?;
        }

        // A token that cannot be resolved to an identity must not survive
        match self.fetch_identity(&login.token).await {
            Ok(identity) => {
                {
                    let mut inner = self.inner.write().await;
                    inner.state = SessionState::Authenticated(identity.clone());
                }
                notify::success(&format!("Logged in as {}", identity.username));
                Ok(identity)
            }
            Err(err) => {
                self.discard_token().await;
                notify::failure(&format!("Login failed: {}", err));
                Err(err)
            }
        }
    }

    /// Register a new account. Registration never authenticates; accounts
    /// wait for administrator approval before first login.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        match self.post_auth_unit("/auth/register", registration).await {
            Ok(_) => {
                notify::success("Registration submitted. Your account is pending approval.");
                Ok(())
            }
            Err(err) => {
                notify::failure(&format!("Registration failed: {}", err));
                Err(err)
            }
        }
    }

    /// Clear the persisted token and in-memory identity.
    ///
    /// No network call is involved, so logout always succeeds; calling it
    /// while already anonymous changes nothing.
    pub async fn logout(&self) {
        self.discard_token().await;
        notify::success("Logged out.");
    }

    /// Forced logout after the server rejected the credential.
    ///
    /// Idempotent: only the transition out of a credentialed state emits the
    /// session-expired notification, so a burst of rejected calls still
    /// produces a single logout.
    pub async fn expire(&self) {
        let mut inner = self.inner.write().await;

        let had_credentials = inner.config.token.is_some()
            || matches!(inner.state, SessionState::Authenticated(_));

        inner.config.clear_token();
        inner.state = SessionState::Anonymous;

        if had_credentials {
            if let Err(err) = inner.config.save_at(self.config_path.as_deref()) {
                warn!("failed to persist config after forced logout: {}", err);
            }
            notify::warn("Session expired. Please log in again.");
        }
    }

    /// Request a password-reset email. No session state changes.
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };

        match self.post_auth_unit("/auth/forgot-password", &body).await {
            Ok(_) => {
                notify::success("Password reset email sent. Check your inbox.");
                Ok(())
            }
            Err(err) => {
                notify::failure(&format!("Could not request password reset: {}", err));
                Err(err)
            }
        }
    }

    /// Redeem a reset token for a new password. No session state changes.
    pub async fn reset_password(&self, reset_token: &str, password: &str) -> Result<()> {
        let body = ResetPasswordRequest {
            token: reset_token.to_string(),
            password: password.to_string(),
        };

        match self.post_auth_unit("/auth/reset-password", &body).await {
            Ok(_) => {
                notify::success("Password updated. You can now log in.");
                Ok(())
            }
            Err(err) => {
                notify::failure(&format!("Could not reset password: {}", err));
                Err(err)
            }
        }
    }

    /// Resolve the current-user record for a token
    async fn fetch_identity(&self, bearer: &str) -> Result<Identity> {
        let url = format!("{}/users/me", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", bearer))
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = http::check_status(response).await?;
        Ok(http::parse_json(response).await?)
    }

    async fn post_auth<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = http::check_status(response).await?;
        Ok(http::parse_json(response).await?)
    }

    /// POST to an auth endpoint where only the status matters
    async fn post_auth_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        http::check_status(response).await?;
        Ok(())
    }

    async fn set_anonymous(&self) {
        let mut inner = self.inner.write().await;
        inner.state = SessionState::Anonymous;
    }

    async fn discard_token(&self) {
        let mut inner = self.inner.write().await;
        inner.config.clear_token();
        inner.state = SessionState::Anonymous;
        if let Err(err) = inner.config.save_at(self.config_path.as_deref()) {
            warn!("failed to persist config: {}", err);
        }
    }
}
