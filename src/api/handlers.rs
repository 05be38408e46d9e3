use crate::{
    api::models::{ApiError, ErrorResponse, HealthResponse},
    core::{errors::UsersError, models::user::User, services::UsersService},
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
};

use std::sync::Arc;

// Define API routes
pub fn api_routes(service: Arc<UsersService>) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/users", axum::routing::get(list_users))
        .route("/users/{user_id}", axum::routing::get(get_user))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_users(State(service): State<Arc<UsersService>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i32, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_user(
    State(service): State<Arc<UsersService>>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    // Undecodable segments (e.g. `%FF`) never reach the parser.
    let Path(user_id) = user_id.map_err(|rejection| UsersError::InvalidUserId(rejection.body_text()))?;
    let user_id = UsersService::parse_user_id(&user_id)?;
    let user = service
        .get_user_by_id(user_id)
        .await?
        .ok_or(UsersError::UserNotFound(user_id))?;
    Ok(Json(user))
}
