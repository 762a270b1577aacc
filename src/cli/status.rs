//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "PicShare Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let ctx = CommandContext::new(opts).await?;
    println!("API host: {}", ctx.session.base_url().cyan());

    println!();

    match ctx.session.stored_token().await {
        Some(stored) => {
            let now = chrono::Utc::now();
            let remaining = stored.expires_at.signed_duration_since(now);
            let hours = remaining.num_hours();
            let mins = remaining.num_minutes() % 60;

            println!(
                "{} Session token valid (expires in {}h {}m)",
                "✓".green(),
                hours,
                mins
            );
        }
        None => {
            println!("{} No session token stored", "○".dimmed());
            println!("  → Run 'picshare login' to sign in");
        }
    }

    match ctx.session.identity().await {
        Some(identity) => {
            println!(
                "{} Logged in as {} ({})",
                "✓".green(),
                identity.username.bold(),
                identity.role
            );
            if !identity.is_approved {
                println!("{} Account pending administrator approval", "⚠".yellow());
            }
            println!(
                "{} Subscription: {}",
                "○".dimmed(),
                identity.subscription_status
            );
        }
        None => {
            println!("{} Not logged in", "○".dimmed());
        }
    }

    let config = Config::load_at(opts.config_ref())?;
    if let Some(language) = config.preferences.language {
        println!("{} Display language: {}", "○".dimmed(), language);
    }

    println!();

    Ok(())
}
