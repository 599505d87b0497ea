//! Repository layer for data access.

mod changeset;
pub mod entities;
mod memory;
mod user_repository;

pub use changeset::UserChangeset;
pub use memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

use common::{AppError, AppResult};
use domain::Password;

/// Hash a plaintext password off the async runtime.
async fn hash_password(plain_text: String) -> AppResult<String> {
    let password = tokio::task::spawn_blocking(move || Password::hash(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

    Ok(password.into_string())
}
