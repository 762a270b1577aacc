//! API trait definitions split by responsibility
//!
//! - [`ImagesApi`] - image and tag operations
//! - [`SubscriptionsApi`] - plan listing and subscription management
//! - [`AdminApi`] - administrator queries and moderation
//!
//! The [`Gateway`](super::Gateway) implements all three against the real
//! backend; tests substitute the in-crate mock client.

mod admin;
mod images;
mod subscriptions;

pub use admin::AdminApi;
pub use images::ImagesApi;
pub use subscriptions::SubscriptionsApi;
