//! Administrator commands
//!
//! Every admin command checks the resolved identity's role locally before
//! sending anything, mirroring the admin gate on the server.

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::AdminApi;
use crate::client::models::{AdminUser, Role};
use crate::error::Result;
use crate::models::{AdminUserDisplay, stat_rows};
use crate::notify;
use crate::output;

/// Role filter for `admin users`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RoleFilter {
    User,
    Admin,
}

/// Approval filter for `admin users`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ApprovalFilter {
    Approved,
    Pending,
}

/// Subscription filter for `admin users`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SubscriptionFilter {
    Active,
    Trial,
    Expired,
    None,
}

/// Arguments for `admin users`
#[derive(Debug, Args, Default)]
pub struct AdminUsersArgs {
    /// Substring search over email, username, and full name
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by role
    #[arg(long, value_enum)]
    pub role: Option<RoleFilter>,

    /// Filter by approval state
    #[arg(long, value_enum)]
    pub status: Option<ApprovalFilter>,

    /// Filter by subscription status
    #[arg(long, value_enum)]
    pub subscription: Option<SubscriptionFilter>,
}

/// Run the admin stats command
pub async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_admin().await?;

    let stats = ctx.gateway.stats().await?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        OutputFormat::Table => output::print(&stat_rows(&stats), ctx.format),
    }
}

/// Run the admin users command
pub async fn users(opts: &GlobalOptions, args: &AdminUsersArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_admin().await?;

    debug!("fetching user list");
    let users = ctx.gateway.list_users().await?;
    debug!("fetched {} users", users.len());

    let users = filter_users(users, args);
    let rows: Vec<AdminUserDisplay> = users.iter().map(AdminUserDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the admin approve command
pub async fn approve(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_admin().await?;

    ctx.gateway.approve_user(user_id).await?;
    notify::success(&format!("User {} approved.", user_id));
    Ok(())
}

/// Run the admin block command
pub async fn block(opts: &GlobalOptions, user_id: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Block user {}? They lose access immediately.",
                user_id
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ctx = CommandContext::new(opts).await?;
    ctx.require_admin().await?;

    ctx.gateway.block_user(user_id).await?;
    notify::success(&format!("User {} blocked.", user_id));
    Ok(())
}

/// Narrow the fetched user list by the given filters, in memory
fn filter_users(users: Vec<AdminUser>, args: &AdminUsersArgs) -> Vec<AdminUser> {
    use crate::client::models::SubscriptionStatus;

    users
        .into_iter()
        .filter(|user| {
            args.search.as_deref().is_none_or(|term| {
                let term = term.to_lowercase();
                user.email.to_lowercase().contains(&term)
                    || user.username.to_lowercase().contains(&term)
                    || user.full_name.to_lowercase().contains(&term)
            })
        })
        .filter(|user| {
            args.role.is_none_or(|role| match role {
                RoleFilter::User => user.role == Role::User,
                RoleFilter::Admin => user.role == Role::Admin,
            })
        })
        .filter(|user| {
            args.status.is_none_or(|status| match status {
                ApprovalFilter::Approved => user.is_approved,
                ApprovalFilter::Pending => !user.is_approved,
            })
        })
        .filter(|user| {
            args.subscription.is_none_or(|filter| {
                let wanted = match filter {
                    SubscriptionFilter::Active => SubscriptionStatus::Active,
                    SubscriptionFilter::Trial => SubscriptionStatus::Trial,
                    SubscriptionFilter::Expired => SubscriptionStatus::Expired,
                    SubscriptionFilter::None => SubscriptionStatus::None,
                };
                user.subscription_status == wanted
            })
        })
        .collect()
}
