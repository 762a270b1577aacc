//! Current-user record and its enumerations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resolved user record from `GET /users/me`.
///
/// Held in memory only; rebuilt from the stored token on every process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub is_approved: bool,
    pub subscription_status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<DateTime<Utc>>,
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Subscription standing as reported on the user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Expired,
    None,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Trial => write!(f, "trial"),
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Expired => write!(f, "expired"),
            SubscriptionStatus::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_deserializes_camel_case() {
        let json = r#"{
            "id": "user-1",
            "email": "admin@example.com",
            "username": "admin1",
            "role": "admin",
            "isApproved": true,
            "subscriptionStatus": "active",
            "subscriptionEndDate": "2026-12-31T00:00:00Z"
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.username, "admin1");
        assert!(identity.role.is_admin());
        assert!(identity.is_approved);
        assert_eq!(identity.subscription_status, SubscriptionStatus::Active);
        assert!(identity.subscription_end_date.is_some());
        assert!(identity.trial_end_date.is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{
            "id": "user-1",
            "email": "x@example.com",
            "username": "x",
            "role": "superuser",
            "isApproved": false,
            "subscriptionStatus": "none"
        }"#;

        assert!(serde_json::from_str::<Identity>(json).is_err());
    }
}
