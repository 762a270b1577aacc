//! Subscription plan and subscription wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Purchasable plan from `GET /subscriptions/plans`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub interval: PlanInterval,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Billing interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Month,
    Year,
}

impl std::fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanInterval::Month => write!(f, "month"),
            PlanInterval::Year => write!(f, "year"),
        }
    }
}

/// The caller's subscription from `GET /subscriptions/my-subscription`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub plan_id: String,
    pub status: SubscriptionState,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<DateTime<Utc>>,
    pub payment_method: PaymentMethod,
    pub auto_renew: bool,
}

/// Lifecycle state of a subscription record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionState {
    Active,
    Canceled,
    Expired,
    Trial,
}

impl std::fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionState::Active => write!(f, "active"),
            SubscriptionState::Canceled => write!(f, "canceled"),
            SubscriptionState::Expired => write!(f, "expired"),
            SubscriptionState::Trial => write!(f, "trial"),
        }
    }
}

/// Supported payment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Stripe,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Paypal => write!(f, "paypal"),
            PaymentMethod::Stripe => write!(f, "stripe"),
        }
    }
}

/// Body for `POST /subscriptions`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub plan_id: String,
    pub payment_method: PaymentMethod,
}

/// Response from `POST /subscriptions`.
///
/// Either the provider needs a checkout step (`redirect_url`) or the
/// subscription was created inline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionResponse {
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}
