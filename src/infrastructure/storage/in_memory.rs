use crate::core::errors::UsersError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Rows served when the binary runs without a database.
    pub fn demo() -> Self {
        InMemoryStorage::with_users(vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
            },
            User {
                id: 3,
                name: "Carol".to_string(),
                email: "carol@example.com".to_string(),
            },
        ])
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UsersError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }
}
