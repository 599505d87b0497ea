//! JSON request/response bodies and their domain conversions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use domain::{CreateUser, UpdateUser, UserRole};

/// User creation request with validation
#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Role ("admin" or "user"); anything else is stored as unspecified
    #[schema(example = "user")]
    pub role: Option<String>,
    /// Plaintext password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
    /// Must equal `password`
    #[schema(example = "correct horse battery staple")]
    pub password_confirm: String,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        CreateUser {
            name: req.name,
            email: req.email,
            role: req.role.map(UserRole::from).unwrap_or_default(),
            password: req.password,
            password_confirm: req.password_confirm,
        }
    }
}

/// Identifier of a newly created user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub id: Uuid,
}

/// Partial user update.
///
/// Omitted (or null) fields are left unchanged; an empty string is stored
/// as an empty string.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Alicia")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "alice2@example.com")]
    pub email: Option<String>,
    /// New role ("admin" or "user")
    #[schema(example = "admin")]
    pub role: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            name: req.name,
            email: req.email,
            role: req
                .role
                .map(UserRole::from)
                .and_then(UserRole::specified),
        }
    }
}
