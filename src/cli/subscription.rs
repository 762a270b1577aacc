//! Plan and subscription commands

use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::SubscriptionsApi;
use crate::client::models::{CreateSubscriptionRequest, PaymentMethod};
use crate::error::{ApiError, Error, Result};
use crate::models::{PlanDisplay, SubscriptionDisplay};
use crate::notify;
use crate::output;

/// Payment provider choice on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PaymentArg {
    Paypal,
    Stripe,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Paypal => PaymentMethod::Paypal,
            PaymentArg::Stripe => PaymentMethod::Stripe,
        }
    }
}

/// On/off switch argument
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Run the plan list command
pub async fn plans(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let plans = ctx.gateway.list_plans().await?;
    let rows: Vec<PlanDisplay> = plans.iter().map(PlanDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the subscription get command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    match ctx.gateway.my_subscription().await {
        Ok(subscription) => {
            output::print(&vec![SubscriptionDisplay::from(&subscription)], ctx.format)
        }
        Err(Error::Api(ApiError::NotFound(_))) => {
            println!("No subscription. See available plans with `picshare plan list`.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Run the subscription create command
pub async fn create(opts: &GlobalOptions, plan_id: &str, payment: PaymentArg) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    let request = CreateSubscriptionRequest {
        plan_id: plan_id.to_string(),
        payment_method: payment.into(),
    };

    let response = ctx.gateway.create_subscription(&request).await?;

    // Some providers need a checkout step before the subscription exists
    if let Some(url) = response.redirect_url {
        println!("Complete the checkout in your browser:");
        println!("  {}", url);
        return Ok(());
    }

    notify::success("Subscription created.");
    if let Some(subscription) = response.subscription {
        output::print(&vec![SubscriptionDisplay::from(&subscription)], ctx.format)?;
    }
    Ok(())
}

/// Run the subscription cancel command
pub async fn cancel(opts: &GlobalOptions, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Cancel your subscription?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    ctx.gateway.cancel_subscription().await?;
    notify::warn("Subscription canceled. It stays usable until the end of the paid period.");
    Ok(())
}

/// Run the subscription auto-renew command
pub async fn auto_renew(opts: &GlobalOptions, state: Toggle) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    let enabled = matches!(state, Toggle::On);
    ctx.gateway.set_auto_renew(enabled).await?;

    if enabled {
        notify::success("Automatic renewal enabled.");
    } else {
        notify::success("Automatic renewal disabled.");
    }
    Ok(())
}
