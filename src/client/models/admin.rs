//! Administrator-facing wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Role, SubscriptionStatus};

/// Aggregate counters from `GET /admin/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub pending_approvals: u64,
    pub total_images: u64,
    pub active_subscriptions: u64,
    pub trial_subscriptions: u64,
    pub expired_subscriptions: u64,
    pub recent_registrations: u64,
}

/// User row from `GET /admin/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    pub is_approved: bool,
    pub subscription_status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}
