//! Authorized request gateway
//!
//! The single request-sending facility shared by every data operation. Each
//! outbound call carries the stored bearer credential when one exists; calls
//! without a token go out bare and the server rejects them where
//! authorization is required.
//!
//! Authorization failures are handled centrally: any 401 forces a session
//! logout and a session-expired notification, then the original error is
//! propagated unchanged. The gateway never retries, never caches, and never
//! swallows an error.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart;
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AdminApi, ImagesApi, SubscriptionsApi};
use super::http;
use super::models::{
    AdminStats, AdminUser, CreateSubscriptionRequest, CreateSubscriptionResponse, Image, ImageTag,
    ImageUpload, NewTag, Subscription, SubscriptionPlan, TagPatch,
};
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Request gateway bound to a session
pub struct Gateway {
    http: HttpClient,
    base_url: String,
    session: Arc<Session>,
}

impl Gateway {
    pub fn new(session: Arc<Session>) -> Result<Self> {
        Ok(Self {
            http: http::build_client()?,
            base_url: session.base_url().to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when present, send, and centrally react
    /// to authorization failures before handing the outcome to the caller.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.session.bearer_token().await {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };

        let response = request.send().await.map_err(ApiError::from)?;

        match http::check_status(response).await {
            Ok(response) => Ok(response),
            Err(ApiError::Unauthorized(message)) => {
                // The credential was rejected; the session cannot survive it
                self.session.expire().await;
                Err(ApiError::Unauthorized(message).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.http.get(self.url(path))).await?;
        Ok(http::parse_json(response).await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(http::parse_json(response).await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .execute(self.http.put(self.url(path)).json(body))
            .await?;
        Ok(http::parse_json(response).await?)
    }

    /// POST where only the status matters; any body is discarded
    async fn post_unit<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let mut request = self.http.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await?;
        Ok(())
    }

    async fn delete_unit(&self, path: &str) -> Result<()> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[async_trait]
impl ImagesApi for Gateway {
    async fn list_images(&self, username: Option<&str>) -> Result<Vec<Image>> {
        let mut request = self.http.get(self.url("/images"));
        if let Some(username) = username {
            request = request.query(&[("user", username)]);
        }

        let response = self.execute(request).await?;
        Ok(http::parse_json(response).await?)
    }

    async fn upload_image(&self, upload: &ImageUpload) -> Result<Image> {
        let part = multipart::Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = multipart::Form::new()
            .part("image", part)
            .text("title", upload.title.clone())
            .text("description", upload.description.clone())
            .text("category", upload.category.clone())
            .text("expiresAt", upload.expires_at.to_rfc3339());

        let response = self
            .execute(self.http.post(self.url("/images/upload")).multipart(form))
            .await?;
        Ok(http::parse_json(response).await?)
    }

    async fn delete_image(&self, image_id: &str) -> Result<()> {
        self.delete_unit(&format!("/images/{}", image_id)).await
    }

    async fn add_tag(&self, image_id: &str, tag: &NewTag) -> Result<ImageTag> {
        self.post_json(&format!("/images/{}/tags", image_id), tag)
            .await
    }

    async fn update_tag(&self, image_id: &str, tag_id: &str, patch: &TagPatch) -> Result<ImageTag> {
        self.put_json(&format!("/images/{}/tags/{}", image_id, tag_id), patch)
            .await
    }

    async fn delete_tag(&self, image_id: &str, tag_id: &str) -> Result<()> {
        self.delete_unit(&format!("/images/{}/tags/{}", image_id, tag_id))
            .await
    }
}

#[async_trait]
impl SubscriptionsApi for Gateway {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        self.get_json("/subscriptions/plans").await
    }

    async fn my_subscription(&self) -> Result<Subscription> {
        self.get_json("/subscriptions/my-subscription").await
    }

    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse> {
        self.post_json("/subscriptions", request).await
    }

    async fn cancel_subscription(&self) -> Result<()> {
        self.post_unit::<()>("/subscriptions/cancel", None).await
    }

    async fn set_auto_renew(&self, auto_renew: bool) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AutoRenewRequest {
            auto_renew: bool,
        }

        self.post_unit("/subscriptions/auto-renew", Some(&AutoRenewRequest { auto_renew }))
            .await
    }
}

#[async_trait]
impl AdminApi for Gateway {
    async fn stats(&self) -> Result<AdminStats> {
        self.get_json("/admin/stats").await
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>> {
        self.get_json("/admin/users").await
    }

    async fn approve_user(&self, user_id: &str) -> Result<()> {
        self.post_unit::<()>(&format!("/admin/users/{}/approve", user_id), None)
            .await
    }

    async fn block_user(&self, user_id: &str) -> Result<()> {
        self.post_unit::<()>(&format!("/admin/users/{}/block", user_id), None)
            .await
    }
}
