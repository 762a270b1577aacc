//! Test fixtures and builders for API model types
//!
//! Builder patterns with sensible defaults, for use in test modules.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};

use super::models::{
    AdminUser, Identity, Image, ImageTag, PaymentMethod, Role, Subscription, SubscriptionPlan,
    PlanInterval, SubscriptionState, SubscriptionStatus,
};

/// Builder for test [`Image`] values
#[derive(Debug, Clone)]
pub struct ImageBuilder {
    id: String,
    title: String,
    description: String,
    category: String,
    tags: Vec<ImageTag>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    username: String,
}

impl ImageBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Image {}", &id),
            description: String::new(),
            category: "other".to_string(),
            tags: Vec::new(),
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::days(14),
            username: "user1".to_string(),
            id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tag(mut self, tag: ImageTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn build(self) -> Image {
        Image {
            url: format!("https://cdn.example.com/{}.jpg", &self.id),
            thumbnail: format!("https://cdn.example.com/{}-thumb.jpg", &self.id),
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags,
            created_at: self.created_at,
            expires_at: self.expires_at,
            user_id: "user-1".to_string(),
            username: self.username,
        }
    }
}

/// Builder for test [`Identity`] values
#[derive(Debug, Clone)]
pub struct IdentityBuilder {
    id: String,
    email: String,
    username: String,
    role: Role,
    is_approved: bool,
    subscription_status: SubscriptionStatus,
}

impl IdentityBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            email: format!("{}@example.com", &id),
            username: id.clone(),
            role: Role::User,
            is_approved: true,
            subscription_status: SubscriptionStatus::Trial,
            id,
        }
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn unapproved(mut self) -> Self {
        self.is_approved = false;
        self
    }

    pub fn subscription_status(mut self, status: SubscriptionStatus) -> Self {
        self.subscription_status = status;
        self
    }

    pub fn build(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role,
            is_approved: self.is_approved,
            subscription_status: self.subscription_status,
            subscription_end_date: None,
            trial_end_date: None,
        }
    }
}

/// Builder for test [`AdminUser`] values
#[derive(Debug, Clone)]
pub struct AdminUserBuilder {
    id: String,
    email: String,
    username: String,
    full_name: String,
    role: Role,
    is_approved: bool,
    subscription_status: SubscriptionStatus,
}

impl AdminUserBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            email: format!("{}@example.com", &id),
            username: id.clone(),
            full_name: format!("User {}", &id),
            role: Role::User,
            is_approved: true,
            subscription_status: SubscriptionStatus::None,
            id,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn pending(mut self) -> Self {
        self.is_approved = false;
        self
    }

    pub fn subscription_status(mut self, status: SubscriptionStatus) -> Self {
        self.subscription_status = status;
        self
    }

    pub fn build(self) -> AdminUser {
        AdminUser {
            id: self.id,
            email: self.email,
            username: self.username,
            full_name: self.full_name,
            role: self.role,
            is_approved: self.is_approved,
            subscription_status: self.subscription_status,
            created_at: Utc::now(),
        }
    }
}

/// Builder for test [`Subscription`] values
#[derive(Debug, Clone)]
pub struct SubscriptionBuilder {
    id: String,
    plan_id: String,
    status: SubscriptionState,
    auto_renew: bool,
}

impl SubscriptionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plan_id: "plan-basic".to_string(),
            status: SubscriptionState::Active,
            auto_renew: true,
        }
    }

    pub fn plan(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = plan_id.into();
        self
    }

    pub fn status(mut self, status: SubscriptionState) -> Self {
        self.status = status;
        self
    }

    pub fn auto_renew(mut self, auto_renew: bool) -> Self {
        self.auto_renew = auto_renew;
        self
    }

    pub fn build(self) -> Subscription {
        Subscription {
            id: self.id,
            user_id: "user-1".to_string(),
            plan_id: self.plan_id,
            status: self.status,
            start_date: Utc::now() - Duration::days(10),
            end_date: Utc::now() + Duration::days(20),
            trial_end_date: None,
            payment_method: PaymentMethod::Stripe,
            auto_renew: self.auto_renew,
        }
    }
}

/// Quick plan fixture
pub fn plan(id: &str, price: f64) -> SubscriptionPlan {
    SubscriptionPlan {
        id: id.to_string(),
        name: format!("Plan {}", id),
        description: String::new(),
        price,
        currency: "USD".to_string(),
        interval: PlanInterval::Month,
        features: vec!["unlimited uploads".to_string()],
    }
}
