//! Image and tag display models

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, truncate_string};
use crate::client::models::{Image, ImageTag};

/// Images expiring within this many days get flagged in listings
const EXPIRING_THRESHOLD_DAYS: i64 = 3;

/// Whole days until the expiration moment, rounded up.
///
/// An image expiring later today counts as 1 day out; a past expiration
/// yields zero or a negative count.
pub fn days_until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expires_at - now).num_seconds();
    (seconds as f64 / 86_400.0).ceil() as i64
}

/// Whether a listing should flag the image as expiring soon
pub fn is_expiring(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    days_until(expires_at, now) <= EXPIRING_THRESHOLD_DAYS
}

/// Image row for `image list` output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ImageDisplay {
    #[tabled(rename = "IMAGE ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "OWNER")]
    pub owner: String,

    #[tabled(rename = "TAGS")]
    pub tags: usize,

    #[tabled(rename = "CREATED")]
    pub created: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,
}

impl ImageDisplay {
    /// Build a row against an explicit clock, so listings are testable
    pub fn with_now(image: &Image, now: DateTime<Utc>) -> Self {
        let days = days_until(image.expires_at, now);
        let expires = if days <= 0 {
            "expired".to_string()
        } else if is_expiring(image.expires_at, now) {
            format!("{} ({}d, expiring)", format_date(image.expires_at), days)
        } else {
            format!("{} ({}d)", format_date(image.expires_at), days)
        };

        Self {
            id: image.id.clone(),
            title: truncate_string(&image.title, 30),
            category: image.category.clone(),
            owner: image.username.clone(),
            tags: image.tags.len(),
            created: format_date(image.created_at),
            expires,
        }
    }
}

impl From<&Image> for ImageDisplay {
    fn from(image: &Image) -> Self {
        ImageDisplay::with_now(image, Utc::now())
    }
}

/// Tag row for tag command output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TagDisplay {
    #[tabled(rename = "TAG ID")]
    pub id: String,

    #[tabled(rename = "X")]
    pub x: f64,

    #[tabled(rename = "Y")]
    pub y: f64,

    #[tabled(rename = "TEXT")]
    pub text: String,

    #[tabled(rename = "LINK")]
    pub link: String,
}

impl From<&ImageTag> for TagDisplay {
    fn from(tag: &ImageTag) -> Self {
        Self {
            id: tag.id.clone(),
            x: tag.x,
            y: tag.y,
            text: tag.text.clone(),
            link: tag.link.clone(),
        }
    }
}
