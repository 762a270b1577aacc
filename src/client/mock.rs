//! Mock API client for testing
//!
//! Implements the API traits over in-memory state so handler logic and
//! trait-level contracts can be exercised without a server.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::api::{AdminApi, ImagesApi, SubscriptionsApi};
use super::models::{
    AdminStats, AdminUser, CreateSubscriptionRequest, CreateSubscriptionResponse, Image, ImageTag,
    ImageUpload, NewTag, Subscription, SubscriptionPlan, SubscriptionState, TagPatch,
};
use crate::error::{ApiError, Result};

/// In-memory stand-in for the backend.
///
/// Seed state with the `with_*` builders; mutations behave like the real
/// API (uploads append, deletes remove, tag ids never repeat). A queued
/// error is returned by the next call and then cleared.
#[derive(Default)]
pub struct MockPicShareClient {
    images: Mutex<Vec<Image>>,
    plans: Mutex<Vec<SubscriptionPlan>>,
    subscription: Mutex<Option<Subscription>>,
    stats: Mutex<Option<AdminStats>>,
    admin_users: Mutex<Vec<AdminUser>>,
    error: Mutex<Option<ApiError>>,
    next_id: Mutex<u64>,
}

impl MockPicShareClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images(self, images: Vec<Image>) -> Self {
        *self.images.try_lock().expect("fresh mock") = images;
        self
    }

    pub fn with_plans(self, plans: Vec<SubscriptionPlan>) -> Self {
        *self.plans.try_lock().expect("fresh mock") = plans;
        self
    }

    pub fn with_subscription(self, subscription: Subscription) -> Self {
        *self.subscription.try_lock().expect("fresh mock") = Some(subscription);
        self
    }

    pub fn with_stats(self, stats: AdminStats) -> Self {
        *self.stats.try_lock().expect("fresh mock") = Some(stats);
        self
    }

    pub fn with_admin_users(self, users: Vec<AdminUser>) -> Self {
        *self.admin_users.try_lock().expect("fresh mock") = users;
        self
    }

    /// Queue an error for the next call
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("fresh mock") = Some(error);
        self
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn next_id(&self, prefix: &str) -> String {
        let mut counter = self.next_id.lock().await;
        *counter += 1;
        format!("{}-{}", prefix, counter)
    }
}

#[async_trait]
impl ImagesApi for MockPicShareClient {
    async fn list_images(&self, username: Option<&str>) -> Result<Vec<Image>> {
        self.take_error().await?;
        let images = self.images.lock().await;
        Ok(images
            .iter()
            .filter(|img| username.is_none_or(|u| img.username == u))
            .cloned()
            .collect())
    }

    async fn upload_image(&self, upload: &ImageUpload) -> Result<Image> {
        self.take_error().await?;
        let id = self.next_id("img").await;
        let image = Image {
            url: format!("https://cdn.example.com/{}.jpg", id),
            thumbnail: format!("https://cdn.example.com/{}-thumb.jpg", id),
            id,
            title: upload.title.clone(),
            description: upload.description.clone(),
            category: upload.category.clone(),
            tags: Vec::new(),
            created_at: Utc::now(),
            expires_at: upload.expires_at,
            user_id: "user-mock".to_string(),
            username: "mockuser".to_string(),
        };

        self.images.lock().await.push(image.clone());
        Ok(image)
    }

    async fn delete_image(&self, image_id: &str) -> Result<()> {
        self.take_error().await?;
        let mut images = self.images.lock().await;
        let before = images.len();
        images.retain(|img| img.id != image_id);
        if images.len() == before {
            return Err(ApiError::NotFound(format!("image {}", image_id)).into());
        }
        Ok(())
    }

    async fn add_tag(&self, image_id: &str, tag: &NewTag) -> Result<ImageTag> {
        self.take_error().await?;
        let created = ImageTag {
            id: self.next_id("tag").await,
            x: tag.x,
            y: tag.y,
            text: tag.text.clone(),
            link: tag.link.clone(),
        };

        let mut images = self.images.lock().await;
        let image = images
            .iter_mut()
            .find(|img| img.id == image_id)
            .ok_or_else(|| ApiError::NotFound(format!("image {}", image_id)))?;
        image.tags.push(created.clone());
        Ok(created)
    }

    async fn update_tag(&self, image_id: &str, tag_id: &str, patch: &TagPatch) -> Result<ImageTag> {
        self.take_error().await?;
        let mut images = self.images.lock().await;
        let image = images
            .iter_mut()
            .find(|img| img.id == image_id)
            .ok_or_else(|| ApiError::NotFound(format!("image {}", image_id)))?;
        let tag = image
            .tags
            .iter_mut()
            .find(|t| t.id == tag_id)
            .ok_or_else(|| ApiError::NotFound(format!("tag {}", tag_id)))?;

        if let Some(x) = patch.x {
            tag.x = x;
        }
        if let Some(y) = patch.y {
            tag.y = y;
        }
        if let Some(text) = &patch.text {
            tag.text = text.clone();
        }
        if let Some(link) = &patch.link {
            tag.link = link.clone();
        }
        Ok(tag.clone())
    }

    async fn delete_tag(&self, image_id: &str, tag_id: &str) -> Result<()> {
        self.take_error().await?;
        let mut images = self.images.lock().await;
        let image = images
            .iter_mut()
            .find(|img| img.id == image_id)
            .ok_or_else(|| ApiError::NotFound(format!("image {}", image_id)))?;
        image.tags.retain(|t| t.id != tag_id);
        Ok(())
    }
}

#[async_trait]
impl SubscriptionsApi for MockPicShareClient {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        self.take_error().await?;
        Ok(self.plans.lock().await.clone())
    }

    async fn my_subscription(&self) -> Result<Subscription> {
        self.take_error().await?;
        self.subscription
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound("no subscription".to_string()).into())
    }

    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse> {
        self.take_error().await?;
        let subscription = Subscription {
            id: self.next_id("sub").await,
            user_id: "user-mock".to_string(),
            plan_id: request.plan_id.clone(),
            status: SubscriptionState::Active,
            start_date: Utc::now(),
            end_date: Utc::now() + chrono::Duration::days(30),
            trial_end_date: None,
            payment_method: request.payment_method,
            auto_renew: true,
        };

        *self.subscription.lock().await = Some(subscription.clone());
        Ok(CreateSubscriptionResponse {
            redirect_url: None,
            subscription: Some(subscription),
        })
    }

    async fn cancel_subscription(&self) -> Result<()> {
        self.take_error().await?;
        let mut subscription = self.subscription.lock().await;
        if let Some(sub) = subscription.as_mut() {
            sub.status = SubscriptionState::Canceled;
            sub.auto_renew = false;
        }
        Ok(())
    }

    async fn set_auto_renew(&self, auto_renew: bool) -> Result<()> {
        self.take_error().await?;
        let mut subscription = self.subscription.lock().await;
        if let Some(sub) = subscription.as_mut() {
            sub.auto_renew = auto_renew;
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for MockPicShareClient {
    async fn stats(&self) -> Result<AdminStats> {
        self.take_error().await?;
        self.stats
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound("no stats".to_string()).into())
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>> {
        self.take_error().await?;
        Ok(self.admin_users.lock().await.clone())
    }

    async fn approve_user(&self, user_id: &str) -> Result<()> {
        self.take_error().await?;
        let mut users = self.admin_users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::NotFound(format!("user {}", user_id)))?;
        user.is_approved = true;
        Ok(())
    }

    async fn block_user(&self, user_id: &str) -> Result<()> {
        self.take_error().await?;
        let mut users = self.admin_users.lock().await;
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(ApiError::NotFound(format!("user {}", user_id)).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::ImageBuilder;
    use crate::error::Error;

    #[tokio::test]
    async fn test_upload_then_list_round_trip_preserves_metadata() {
        let mock = MockPicShareClient::new();
        let expires_at = Utc::now() + chrono::Duration::days(14);

        let upload = ImageUpload {
            file_name: "sofa.jpg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
            title: "Corner sofa".to_string(),
            description: "Barely used".to_string(),
            category: "furniture".to_string(),
            expires_at,
        };

        mock.upload_image(&upload).await.unwrap();
        let images = mock.list_images(None).await.unwrap();

        let listed = images
            .iter()
            .find(|img| img.title == "Corner sofa")
            .expect("uploaded image is listed");
        assert_eq!(listed.category, "furniture");
        assert_eq!(listed.expires_at, expires_at);
    }

    #[tokio::test]
    async fn test_added_tag_keeps_exact_coordinates_and_fresh_id() {
        let existing = ImageTag {
            id: "tag-1".to_string(),
            x: 0.5,
            y: 0.5,
            text: "old".to_string(),
            link: String::new(),
        };
        let image = ImageBuilder::new("img-x").tag(existing).build();
        let mock = MockPicShareClient::new().with_images(vec![image]);

        let tag = mock
            .add_tag(
                "img-x",
                &NewTag {
                    x: 0.25,
                    y: 0.75,
                    text: "lamp".to_string(),
                    link: "https://shop.example.com/lamp".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!((tag.x, tag.y), (0.25, 0.75));

        let images = mock.list_images(None).await.unwrap();
        let tags = &images[0].tags;
        assert_eq!(tags.len(), 2);
        assert!(
            tags.iter().filter(|t| t.id == tag.id).count() == 1,
            "new tag id must not collide"
        );
        let stored = tags.iter().find(|t| t.id == tag.id).unwrap();
        assert_eq!((stored.x, stored.y), (0.25, 0.75));
    }

    #[tokio::test]
    async fn test_queued_error_is_consumed_once() {
        let mock = MockPicShareClient::new()
            .with_error(ApiError::ServerError("flaky".to_string()));

        let err = mock.list_images(None).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));

        // Second call succeeds
        assert!(mock.list_images(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_filters_by_username() {
        let mock = MockPicShareClient::new().with_images(vec![
            ImageBuilder::new("img-1").username("alice").build(),
            ImageBuilder::new("img-2").username("bob").build(),
        ]);

        let images = mock.list_images(Some("alice")).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "img-1");
    }
}
