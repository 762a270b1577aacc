//! Image and tag operations

use async_trait::async_trait;

use crate::client::models::{Image, ImageTag, ImageUpload, NewTag, TagPatch};
use crate::error::Result;

/// Image CRUD plus tag placement
#[async_trait]
pub trait ImagesApi: Send + Sync {
    /// List images, optionally restricted to one user's gallery
    async fn list_images(&self, username: Option<&str>) -> Result<Vec<Image>>;

    /// Upload an image with its metadata; returns the stored record
    async fn upload_image(&self, upload: &ImageUpload) -> Result<Image>;

    /// Delete an image owned by the caller
    async fn delete_image(&self, image_id: &str) -> Result<()>;

    /// Place a tag on an image; the server assigns the tag id
    async fn add_tag(&self, image_id: &str, tag: &NewTag) -> Result<ImageTag>;

    /// Update fields of an existing tag
    async fn update_tag(&self, image_id: &str, tag_id: &str, patch: &TagPatch) -> Result<ImageTag>;

    /// Remove a tag from an image
    async fn delete_tag(&self, image_id: &str, tag_id: &str) -> Result<()>;
}
