//! Authentication commands

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, RegisterArgs};
use crate::client::models::Registration;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::IdentityDisplay;
use crate::output;
use crate::session::Session;

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let email = match email {
        Some(email) => email.to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    // No startup resolution here: a fresh login replaces whatever token the
    // config may still hold.
    let config = Config::load_at(opts.config_ref())?;
    let session = Session::new(config, opts.api_host_ref(), opts.config_ref())?;

    let identity = session.login(&email, &password).await?;

    output::print(&vec![IdentityDisplay::from(&identity)], opts.format)
}

/// Run the register command
pub async fn register(opts: &GlobalOptions, args: &RegisterArgs) -> Result<()> {
    if !args.accept_terms {
        return Err(Error::Validation(
            "You must accept the terms of service (--accept-terms).".to_string(),
        ));
    }

    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let config = Config::load_at(opts.config_ref())?;
    let session = Session::new(config, opts.api_host_ref(), opts.config_ref())?;

    let registration = Registration {
        email: args.email.clone(),
        password,
        username: args.username.clone(),
        full_name: args.full_name.clone(),
        accept_terms: args.accept_terms,
    };

    session.register(&registration).await
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let session = Session::new(config, opts.api_host_ref(), opts.config_ref())?;

    session.logout().await;
    Ok(())
}

/// Run the forgot-password command
pub async fn forgot_password(opts: &GlobalOptions, email: &str) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let session = Session::new(config, opts.api_host_ref(), opts.config_ref())?;

    session.forgot_password(email).await
}

/// Run the reset-password command
pub async fn reset_password(
    opts: &GlobalOptions,
    reset_token: &str,
    password: Option<&str>,
) -> Result<()> {
    let password = match password {
        Some(password) => password.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("New password")
            .with_confirmation("Confirm new password", "Passwords do not match")
            .interact()?,
    };

    let config = Config::load_at(opts.config_ref())?;
    let session = Session::new(config, opts.api_host_ref(), opts.config_ref())?;

    session.reset_password(reset_token, &password).await
}

/// Run the whoami command
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let identity = ctx.require_identity().await?;

    output::print(&vec![IdentityDisplay::from(&identity)], ctx.format)
}
