//! Administrator display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, yes_no};
use crate::client::models::{AdminStats, AdminUser};

/// User row for `admin users` output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AdminUserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "APPROVED")]
    pub approved: String,

    #[tabled(rename = "SUBSCRIPTION")]
    pub subscription: String,

    #[tabled(rename = "REGISTERED")]
    pub registered: String,
}

impl From<&AdminUser> for AdminUserDisplay {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.full_name.clone(),
            role: user.role.to_string(),
            approved: yes_no(user.is_approved),
            subscription: user.subscription_status.to_string(),
            registered: format_date(user.created_at),
        }
    }
}

/// One metric/value row for `admin stats` table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatRow {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: u64,
}

/// Flatten the stats record into table rows
pub fn stat_rows(stats: &AdminStats) -> Vec<StatRow> {
    let row = |metric: &str, value: u64| StatRow {
        metric: metric.to_string(),
        value,
    };

    vec![
        row("Total users", stats.total_users),
        row("Pending approvals", stats.pending_approvals),
        row("Total images", stats.total_images),
        row("Active subscriptions", stats.active_subscriptions),
        row("Trial subscriptions", stats.trial_subscriptions),
        row("Expired subscriptions", stats.expired_subscriptions),
        row("Registrations (last 7 days)", stats.recent_registrations),
    ]
}
