//! Conversions between `user_v1` wire messages and domain types.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use domain::{CreateUser, UpdateUser, User, UserRole};
use proto::user::{CreateRequest, GetResponse, Role, UpdateRequest};

/// Decode a wire role; unknown values become the unset sentinel.
pub fn role_from_proto(code: i32) -> UserRole {
    match Role::try_from(code) {
        Ok(Role::Admin) => UserRole::Admin,
        Ok(Role::User) => UserRole::User,
        Ok(Role::Unspecified) | Err(_) => UserRole::Unspecified,
    }
}

pub fn role_to_proto(role: UserRole) -> Role {
    match role {
        UserRole::Admin => Role::Admin,
        UserRole::User => Role::User,
        UserRole::Unspecified => Role::Unspecified,
    }
}

pub fn create_request_to_domain(req: CreateRequest) -> CreateUser {
    CreateUser {
        name: req.name,
        email: req.email,
        role: role_from_proto(req.role),
        password: req.password,
        password_confirm: req.password_confirm,
    }
}

/// Fields not sent stay `None`; an unset role never becomes a change.
pub fn update_request_to_domain(req: UpdateRequest) -> UpdateUser {
    UpdateUser {
        name: req.name,
        email: req.email,
        role: role_from_proto(req.role).specified(),
    }
}

/// Convert domain User to the Get response (no password hash).
pub fn user_to_get_response(user: &User) -> GetResponse {
    GetResponse {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: role_to_proto(user.role) as i32,
        created_at: Some(to_timestamp(user.created_at)),
        updated_at: user.updated_at.map(to_timestamp),
    }
}

fn to_timestamp(dt: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_unknown_role_code_is_unspecified() {
        assert_eq!(role_from_proto(99), UserRole::Unspecified);
        assert_eq!(role_from_proto(-1), UserRole::Unspecified);
        assert_eq!(role_from_proto(Role::Admin as i32), UserRole::Admin);
    }

    #[test]
    fn test_update_request_absent_fields_stay_absent() {
        let changes = update_request_to_domain(UpdateRequest {
            id: Uuid::new_v4().to_string(),
            name: None,
            email: Some(String::new()),
            role: Role::Unspecified as i32,
        });

        assert_eq!(changes.name, None);
        assert_eq!(changes.email, Some(String::new()));
        assert_eq!(changes.role, None);
    }

    #[test]
    fn test_create_request_to_domain() {
        let req = create_request_to_domain(CreateRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "p".to_string(),
            password_confirm: "q".to_string(),
            role: Role::User as i32,
        });

        assert_eq!(req.role, UserRole::User);
        assert!(!req.passwords_match());
    }

    #[test]
    fn test_get_response_omits_missing_updated_at() {
        let created_at = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: UserRole::Admin,
            password_hash: "hashed".to_string(),
            created_at,
            updated_at: None,
        };

        let response = user_to_get_response(&user);
        assert_eq!(response.id, user.id.to_string());
        assert_eq!(response.role, Role::Admin as i32);
        assert_eq!(
            response.created_at.map(|ts| ts.seconds),
            Some(created_at.timestamp())
        );
        assert!(response.updated_at.is_none());
    }
}
