//! Image commands

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::ImagesApi;
use crate::client::models::{Image, ImageUpload};
use crate::error::{Error, Result};
use crate::models::ImageDisplay;
use crate::notify;
use crate::output;

/// Upload size limit enforced before any network call
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// File extensions accepted as images
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Sort orders for image listings
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Most recently created first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// Soonest expiration first
    Expiring,
}

/// Arguments for `image list`
#[derive(Debug, Args, Default)]
pub struct ImageListArgs {
    /// Only show one user's gallery
    #[arg(long)]
    pub user: Option<String>,

    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Substring search over title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value = "newest")]
    pub sort: SortOrder,
}

/// Arguments for `image upload`
#[derive(Debug, Args)]
pub struct ImageUploadArgs {
    /// Path to the image file
    pub file: PathBuf,

    /// Image title
    #[arg(long)]
    pub title: String,

    /// Category (e.g. electronics, clothing, furniture)
    #[arg(long)]
    pub category: String,

    /// Longer description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Days until the image expires
    #[arg(long = "expires-in", default_value_t = 14)]
    pub expires_in: i64,
}

/// Run the image list command
pub async fn list(opts: &GlobalOptions, args: &ImageListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    debug!("fetching images (user filter: {:?})", args.user);
    let images = ctx.gateway.list_images(args.user.as_deref()).await?;
    debug!("fetched {} images", images.len());

    let images = filter_images(images, args.search.as_deref(), args.category.as_deref());
    let images = sort_images(images, args.sort);

    let rows: Vec<ImageDisplay> = images.iter().map(ImageDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the image upload command
pub async fn upload(opts: &GlobalOptions, args: &ImageUploadArgs) -> Result<()> {
    check_extension(&args.file)?;

    let bytes = tokio::fs::read(&args.file).await?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(Error::Validation(format!(
            "{} exceeds the 5 MB upload limit",
            args.file.display()
        )));
    }

    if args.expires_in < 1 {
        return Err(Error::Validation(
            "--expires-in must be at least 1 day".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let upload = ImageUpload {
        file_name,
        bytes,
        title: args.title.clone(),
        description: args.description.clone(),
        category: args.category.clone(),
        expires_at: Utc::now() + Duration::days(args.expires_in),
    };

    let image = ctx.gateway.upload_image(&upload).await?;

    notify::success(&format!("Uploaded \"{}\" ({})", image.title, image.id));
    output::print(&vec![ImageDisplay::from(&image)], ctx.format)
}

/// Run the image delete command
pub async fn delete(opts: &GlobalOptions, image_id: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete image {}?", image_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ctx = CommandContext::new(opts).await?;
    ctx.require_identity().await?;

    ctx.gateway.delete_image(image_id).await?;
    notify::success(&format!("Deleted image {}", image_id));
    Ok(())
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::Validation(format!(
            "{} does not look like an image file (expected one of: {})",
            path.display(),
            IMAGE_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

/// Narrow a fetched listing by category and search term, in memory
fn filter_images(images: Vec<Image>, search: Option<&str>, category: Option<&str>) -> Vec<Image> {
    images
        .into_iter()
        .filter(|img| category.is_none_or(|c| img.category.eq_ignore_ascii_case(c)))
        .filter(|img| {
            search.is_none_or(|term| {
                let term = term.to_lowercase();
                img.title.to_lowercase().contains(&term)
                    || img.description.to_lowercase().contains(&term)
            })
        })
        .collect()
}

fn sort_images(mut images: Vec<Image>, sort: SortOrder) -> Vec<Image> {
    match sort {
        SortOrder::Newest => images.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => images.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Expiring => images.sort_by(|a, b| a.expires_at.cmp(&b.expires_at)),
    }
    images
}
