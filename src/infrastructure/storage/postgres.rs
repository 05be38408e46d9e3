use crate::config::Config;
use crate::core::errors::UsersError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

const LIST_USERS: &str = "SELECT id, name, email FROM users";
const GET_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";

/// Builds the connection pool without dialing the database.
///
/// Connections are opened on first use, so the server comes up (and the
/// health check answers) while the store is unreachable.
pub fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool, UsersError> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_lazy(database_url)
        .map_err(UsersError::from)
}

#[derive(Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        PostgresStorage { pool }
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        let users = sqlx::query_as::<_, User>(LIST_USERS).fetch_all(&self.pool).await?;
        Ok(users)
    }

    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UsersError> {
        let user = sqlx::query_as::<_, User>(GET_USER_BY_ID)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
