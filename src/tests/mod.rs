mod postgres_tests;

use crate::core::errors::UsersError;
use crate::core::models::user::User;
use crate::core::services::UsersService;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;

/// Storage double whose every query fails like a refused connection.
pub struct UnavailableStorage;

#[async_trait]
impl Storage for UnavailableStorage {
    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        Err(UsersError::DatabaseError("connection refused".to_string()))
    }

    async fn get_user_by_id(&self, _user_id: i32) -> Result<Option<User>, UsersError> {
        Err(UsersError::DatabaseError("connection refused".to_string()))
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn alice() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
        email: "alice@x.com".to_string(),
    }
}

pub fn bob() -> User {
    User {
        id: 2,
        name: "Bob".to_string(),
        email: "bob@x.com".to_string(),
    }
}

pub fn create_test_service(users: Vec<User>) -> UsersService {
    UsersService::new(InMemoryStorage::with_users(users))
}
