//! Wire types for the PicShare API
//!
//! Every request and response body has an explicit type here; payload shape
//! is validated by deserialization at the gateway boundary rather than
//! trusted downstream.

mod admin;
mod auth;
mod image;
mod subscription;
mod user;

pub use admin::{AdminStats, AdminUser};
pub use auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, Registration, ResetPasswordRequest,
};
pub use image::{Image, ImageTag, ImageUpload, NewTag, TagPatch};
pub use subscription::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, PaymentMethod, PlanInterval,
    Subscription, SubscriptionPlan, SubscriptionState,
};
pub use user::{Identity, Role, SubscriptionStatus};
