use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, HealthResponse},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::health, super::handlers::list_users, super::handlers::get_user),
    components(schemas(HealthResponse, ErrorResponse, User)),
    info(
        title = "Users API",
        description = "Read-only access to the users table",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
