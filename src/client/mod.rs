//! PicShare API client
//!
//! Split into the trait seams ([`api`]), the wire types ([`models`]), and the
//! authorized request gateway ([`gateway`]) that every data operation goes
//! through.

pub mod api;
pub mod gateway;
pub(crate) mod http;
pub mod models;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use api::{AdminApi, ImagesApi, SubscriptionsApi};
pub use gateway::Gateway;

/// Production API base URL
pub const DEFAULT_API_HOST: &str = "https://api.picshare.app/api";
