//! Presentation-side models

pub mod display;

pub use display::{
    AdminUserDisplay, IdentityDisplay, ImageDisplay, PlanDisplay, SubscriptionDisplay, TagDisplay,
    stat_rows,
};
