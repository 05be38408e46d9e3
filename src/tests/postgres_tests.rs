use crate::api::build_app;
use crate::config::Config;
use crate::core::errors::UsersError;
use crate::core::services::UsersService;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::postgres::{PostgresStorage, connect_pool};
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

fn fast_fail_config() -> Config {
    Config::from_lookup(|key| match key {
        "DB_ACQUIRE_TIMEOUT_SECS" => Some("1".to_string()),
        _ => None,
    })
}

// URL of a port with no listener behind it.
async fn refused_database_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("postgres://postgres@{}/users", addr)
}

#[tokio::test]
async fn test_refused_connection_is_database_error() {
    let config = fast_fail_config();
    let pool = connect_pool(&config, &refused_database_url().await).unwrap();
    let storage = PostgresStorage::new(pool);

    assert!(matches!(storage.list_users().await, Err(UsersError::DatabaseError(_))));
    assert!(matches!(storage.get_user_by_id(1).await, Err(UsersError::DatabaseError(_))));
}

#[tokio::test]
async fn test_refused_connection_is_opaque_500() {
    let config = fast_fail_config();
    let pool = connect_pool(&config, &refused_database_url().await).unwrap();
    let app = build_app(Arc::new(UsersService::new(PostgresStorage::new(pool))), &config);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "needs a PostgreSQL users table reachable through DATABASE_URL"]
async fn test_live_table_round_trip() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is set");
    let config = Config::from_lookup(|_| None);
    let storage = PostgresStorage::new(connect_pool(&config, &database_url).unwrap());

    let users = storage.list_users().await.unwrap();
    for user in &users {
        let fetched = storage.get_user_by_id(user.id).await.unwrap();
        assert_eq!(fetched.as_ref(), Some(user));
    }

    let max_id = users.iter().map(|u| u.id).max().unwrap_or(0);
    if let Some(missing) = max_id.checked_add(1) {
        assert!(storage.get_user_by_id(missing).await.unwrap().is_none());
    }
}
