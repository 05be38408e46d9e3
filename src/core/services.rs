use crate::core::errors::UsersError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use std::sync::Arc;
use tracing::debug;

/// Read-side use cases over the `users` table.
///
/// The storage adapter is picked at startup (PostgreSQL or the in-memory
/// demo rows), so it is held as a trait object.
#[derive(Clone)]
pub struct UsersService {
    storage: Arc<dyn Storage>,
}

impl UsersService {
    pub fn new<S: Storage + 'static>(storage: S) -> Self {
        UsersService {
            storage: Arc::new(storage),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        let users = self.storage.list_users().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    pub async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UsersError> {
        let user = self.storage.get_user_by_id(user_id).await?;
        if user.is_none() {
            debug!(user_id, "user not found");
        }
        Ok(user)
    }

    /// Coerces a raw path segment into a user id.
    pub fn parse_user_id(raw: &str) -> Result<i32, UsersError> {
        raw.parse::<i32>()
            .map_err(|_| UsersError::InvalidUserId(raw.to_string()))
    }
}
