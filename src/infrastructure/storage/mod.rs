use crate::core::errors::UsersError;
use crate::core::models::user::User;
use async_trait::async_trait;

/// Read access to the `users` table.
///
/// A missing row is `Ok(None)`; `Err` is reserved for store failures.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, UsersError>;
    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UsersError>;
}

pub mod in_memory;
pub mod postgres;
