use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    /// No row with the given primary key
    #[error("User with ID {0} not found")]
    UserNotFound(i32),

    /// Path parameter could not be coerced into an integer id
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// Query or connection failure reported by the store
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UsersError {
    fn from(err: sqlx::Error) -> Self {
        UsersError::DatabaseError(err.to_string())
    }
}
