//! Administrator operations

use async_trait::async_trait;

use crate::client::models::{AdminStats, AdminUser};
use crate::error::Result;

/// Aggregate statistics and user moderation
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn stats(&self) -> Result<AdminStats>;

    async fn list_users(&self) -> Result<Vec<AdminUser>>;

    async fn approve_user(&self, user_id: &str) -> Result<()>;

    /// Block a user; blocked users disappear from the listing
    async fn block_user(&self, user_id: &str) -> Result<()>;
}
