//! Tag commands
//!
//! Tag positions are fractions of the rendered image size, so a tag placed
//! at (0.25, 0.75) lands a quarter of the way across and three quarters of
//! the way down regardless of display resolution.

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::ImagesApi;
use crate::client::models::{NewTag, TagPatch};
use crate::error::{Error, Result};
use crate::models::TagDisplay;
use crate::notify;
use crate::output;

/// Arguments for `tag add`
#[derive(Debug, Args)]
pub struct TagAddArgs {
    /// Image ID
    pub image_id: String,

    /// Horizontal position, 0 (left) to 1 (right)
    #[arg(long)]
    pub x: f64,

    /// Vertical position, 0 (top) to 1 (bottom)
    #[arg(long)]
    pub y: f64,

    /// Tag label
    #[arg(long)]
    pub text: String,

    /// Optional link target
    #[arg(long, default_value = "")]
    pub link: String,
}

/// Arguments for `tag update`
#[derive(Debug, Args)]
pub struct TagUpdateArgs {
    /// Image ID
    pub image_id: String,

    /// Tag ID
    pub tag_id: String,

    /// New horizontal position, 0 to 1
    #[arg(long)]
    pub x: Option<f64>,

    /// New vertical position, 0 to 1
    #[arg(long)]
    pub y: Option<f64>,

    /// New tag label
    #[arg(long)]
    pub text: Option<String>,

    /// New link target
    #[arg(long)]
    pub link: Option<String>,
}

/// Run the tag add command
pub async fn add(opts: &GlobalOptions, args: &TagAddArgs) -> Result<()> {
    check_coordinate("x", args.x)?;
    check_coordinate("y", args.y)?;

    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    let tag = NewTag {
        x: args.x,
        y: args.y,
        text: args.text.clone(),
        link: args.link.clone(),
    };

    let created = ctx.gateway.add_tag(&args.image_id, &tag).await?;

    notify::success(&format!("Tag {} added to {}", created.id, args.image_id));
    output::print(&vec![TagDisplay::from(&created)], ctx.format)
}

/// Run the tag update command
pub async fn update(opts: &GlobalOptions, args: &TagUpdateArgs) -> Result<()> {
    if args.x.is_none() && args.y.is_none() && args.text.is_none() && args.link.is_none() {
        return Err(Error::Validation(
            "Nothing to update: pass at least one of --x, --y, --text, --link.".to_string(),
        ));
    }
    if let Some(x) = args.x {
        check_coordinate("x", x)?;
    }
    if let Some(y) = args.y {
        check_coordinate("y", y)?;
    }

    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    let patch = TagPatch {
        x: args.x,
        y: args.y,
        text: args.text.clone(),
        link: args.link.clone(),
    };

    let updated = ctx
        .gateway
        .update_tag(&args.image_id, &args.tag_id, &patch)
        .await?;

    notify::success(&format!("Tag {} updated", updated.id));
    output::print(&vec![TagDisplay::from(&updated)], ctx.format)
}

/// Run the tag remove command
pub async fn remove(opts: &GlobalOptions, image_id: &str, tag_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    ctx.gateway.delete_tag(image_id, tag_id).await?;
    notify::success(&format!("Tag {} removed from {}", tag_id, image_id));
    Ok(())
}

fn check_coordinate(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) || !value.is_finite() {
        return Err(Error::Validation(format!(
            "--{} must be between 0 and 1 (got {})",
            name, value
        )));
    }
    Ok(())
}
