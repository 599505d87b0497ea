//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    ROLE_ADMIN, ROLE_CODE_ADMIN, ROLE_CODE_UNSPECIFIED, ROLE_CODE_USER, ROLE_UNSPECIFIED, ROLE_USER,
};

/// User roles enumeration.
///
/// `Unspecified` is the "unset/unknown" sentinel. It is never an assignable
/// role and every unrecognized code or name decodes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    #[default]
    Unspecified,
    Admin,
    User,
}

impl UserRole {
    /// Storage code (SMALLINT column)
    pub fn code(self) -> i16 {
        match self {
            UserRole::Unspecified => ROLE_CODE_UNSPECIFIED,
            UserRole::Admin => ROLE_CODE_ADMIN,
            UserRole::User => ROLE_CODE_USER,
        }
    }

    /// `None` for the unset sentinel, the role otherwise.
    pub fn specified(self) -> Option<UserRole> {
        match self {
            UserRole::Unspecified => None,
            role => Some(role),
        }
    }
}

impl From<i16> for UserRole {
    fn from(code: i16) -> Self {
        match code {
            ROLE_CODE_ADMIN => UserRole::Admin,
            ROLE_CODE_USER => UserRole::User,
            _ => UserRole::Unspecified,
        }
    }
}

impl From<i32> for UserRole {
    fn from(code: i32) -> Self {
        i16::try_from(code)
            .map(UserRole::from)
            .unwrap_or(UserRole::Unspecified)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            ROLE_ADMIN => UserRole::Admin,
            ROLE_USER => UserRole::User,
            _ => UserRole::Unspecified,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from(s.as_str())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
            UserRole::Unspecified => write!(f, "{}", ROLE_UNSPECIFIED),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (None until the first update)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Apply a partial update: only supplied fields change.
    pub fn apply(&mut self, changes: UpdateUser, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role.and_then(UserRole::specified) {
            self.role = role;
        }
        self.updated_at = Some(now);
    }
}

/// User creation input (plaintext credentials).
#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
    pub password_confirm: String,
}

impl CreateUser {
    /// True when the password and its confirmation are identical.
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirm
    }
}

// Plaintext credentials never reach logs
impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password", &"[REDACTED]")
            .field("password_confirm", &"[REDACTED]")
            .finish()
    }
}

/// Partial user update.
///
/// `None` leaves the stored value untouched. `Some(String::new())` is an
/// explicit assignment of the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUser {
    /// True when no field is supplied (only the update timestamp changes).
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
    /// User role
    #[cfg_attr(feature = "openapi", schema(example = "user"))]
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (absent until the first update)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
