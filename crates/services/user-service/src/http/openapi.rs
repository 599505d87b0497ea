//! OpenAPI documentation.

use utoipa::OpenApi;

use super::dto::{CreateUserRequest, CreateUserResponse, UpdateUserRequest};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::http::handlers::create_user,
        crate::http::handlers::get_user,
        crate::http::handlers::update_user,
        crate::http::handlers::delete_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            CreateUserResponse,
            UpdateUserRequest,
            UserResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
