//! Subscription operations

use async_trait::async_trait;

use crate::client::models::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, Subscription, SubscriptionPlan,
};
use crate::error::Result;

/// Plan listing and subscription management for the current user
#[async_trait]
pub trait SubscriptionsApi: Send + Sync {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>>;

    async fn my_subscription(&self) -> Result<Subscription>;

    /// Start a subscription; may hand back a provider checkout URL instead
    /// of a finished subscription
    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse>;

    async fn cancel_subscription(&self) -> Result<()>;

    async fn set_auto_renew(&self, auto_renew: bool) -> Result<()>;
}
