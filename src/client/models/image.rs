//! Image and tag wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image record as returned by the listing and upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<ImageTag>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
    pub username: String,
}

/// Clickable tag anchored at a normalized position on the image.
///
/// `x` and `y` are fractions of the rendered width/height in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTag {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub text: String,
    #[serde(default)]
    pub link: String,
}

/// Body for `POST /images/:id/tags`
#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub link: String,
}

/// Body for `PUT /images/:id/tags/:tagId`; only the given fields change
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Multipart payload for `POST /images/upload`.
///
/// The file is read into memory before the call; there is no streaming
/// upload. Metadata fields travel as plain form fields next to the bytes.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub expires_at: DateTime<Utc>,
}
