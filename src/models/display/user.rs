//! Identity display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, yes_no};
use crate::client::models::{Identity, SubscriptionStatus};

/// Resolved identity for `whoami` output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IdentityDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "APPROVED")]
    pub approved: String,

    #[tabled(rename = "SUBSCRIPTION")]
    pub subscription: String,
}

impl From<&Identity> for IdentityDisplay {
    fn from(identity: &Identity) -> Self {
        let subscription = match (
            identity.subscription_status,
            identity.subscription_end_date,
            identity.trial_end_date,
        ) {
            (status, Some(end), _) => format!("{} (until {})", status, format_date(end)),
            (status @ SubscriptionStatus::Trial, None, Some(end)) => {
                format!("{} (until {})", status, format_date(end))
            }
            (status, None, _) => status.to_string(),
        };

        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            username: identity.username.clone(),
            role: identity.role.to_string(),
            approved: yes_no(identity.is_approved),
            subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::IdentityBuilder;
    use crate::client::models::SubscriptionStatus;

    #[test]
    fn test_identity_display_basic_fields() {
        let identity = IdentityBuilder::new("user-1").admin().build();
        let display = IdentityDisplay::from(&identity);

        assert_eq!(display.id, "user-1");
        assert_eq!(display.role, "admin");
        assert_eq!(display.approved, "yes");
    }

    #[test]
    fn test_identity_display_subscription_without_dates() {
        let identity = IdentityBuilder::new("user-2")
            .subscription_status(SubscriptionStatus::None)
            .build();
        let display = IdentityDisplay::from(&identity);

        assert_eq!(display.subscription, "none");
    }
}
