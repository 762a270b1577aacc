//! Plan and subscription display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, truncate_string, yes_no};
use crate::client::models::{Subscription, SubscriptionPlan};

/// Plan row for `plan list` output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PlanDisplay {
    #[tabled(rename = "PLAN ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "FEATURES")]
    pub features: String,
}

impl From<&SubscriptionPlan> for PlanDisplay {
    fn from(plan: &SubscriptionPlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            price: format!("{:.2} {}/{}", plan.price, plan.currency, plan.interval),
            description: truncate_string(&plan.description, 40),
            features: truncate_string(&plan.features.join(", "), 40),
        }
    }
}

/// Subscription row for `subscription get` output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SubscriptionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "PLAN")]
    pub plan: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "STARTED")]
    pub started: String,

    #[tabled(rename = "ENDS")]
    pub ends: String,

    #[tabled(rename = "AUTO-RENEW")]
    pub auto_renew: String,

    #[tabled(rename = "PAYMENT")]
    pub payment: String,
}

impl From<&Subscription> for SubscriptionDisplay {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: subscription.id.clone(),
            plan: subscription.plan_id.clone(),
            status: subscription.status.to_string(),
            started: format_date(subscription.start_date),
            ends: format_date(subscription.end_date),
            auto_renew: yes_no(subscription.auto_renew),
            payment: subscription.payment_method.to_string(),
        }
    }
}
