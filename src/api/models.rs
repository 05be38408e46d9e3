use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::UsersError;

pub const HEALTHY: &str = "healthy";
pub const HEALTH_MESSAGE: &str = "Application is running";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            status: HEALTHY.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

// Error envelope shared by every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for UsersError to implement IntoResponse
pub struct ApiError(pub UsersError);

impl From<UsersError> for ApiError {
    fn from(err: UsersError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            err @ UsersError::UserNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            err @ UsersError::InvalidUserId(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            err @ UsersError::DatabaseError(_) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR.to_string())
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
