pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::client::{ClientError, UsersClient};
pub use crate::core::errors::UsersError;
pub use crate::core::models::user::User;
pub use crate::core::services::UsersService;
pub use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, postgres::PostgresStorage};

#[cfg(test)]
mod tests;
