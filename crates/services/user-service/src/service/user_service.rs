//! User service - Handles user-related business logic.
//!
//! Owns the one business rule of account creation (password confirmation)
//! and otherwise delegates to the repository, passing errors through.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User, PASSWORDS_NOT_EQUAL};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user after checking the password confirmation
    async fn create_user(&self, req: CreateUser) -> AppResult<Uuid>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Update the supplied fields of a user
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<()>;

    /// Permanently delete a user (idempotent)
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, req: CreateUser) -> AppResult<Uuid> {
        if !req.passwords_match() {
            return Err(AppError::validation(PASSWORDS_NOT_EQUAL));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        if req.email.trim().is_empty() {
            return Err(AppError::validation("email must not be empty"));
        }

        self.repo.create(req).await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.get(id).await
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<()> {
        self.repo.update(id, changes).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
