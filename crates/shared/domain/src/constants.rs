//! Domain-level constants.
//!
//! These constants define business rules and the wire/storage encoding of roles.

// =============================================================================
// User Roles
// =============================================================================

/// Text form of the unset role sentinel
pub const ROLE_UNSPECIFIED: &str = "unspecified";

/// Regular user role
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Stored code of the unset role sentinel
pub const ROLE_CODE_UNSPECIFIED: i16 = 0;

/// Stored code of the admin role
pub const ROLE_CODE_ADMIN: i16 = 1;

/// Stored code of the user role
pub const ROLE_CODE_USER: i16 = 2;

// =============================================================================
// Validation
// =============================================================================

/// Message returned when the password confirmation does not match
pub const PASSWORDS_NOT_EQUAL: &str = "passwords are not equal";
