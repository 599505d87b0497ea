//! In-memory implementation of UserRepository (for development/testing).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::hash_password;
use super::UserRepository;
use common::{AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, User};

/// Stores users in a shared map with the same semantics as `UserStore`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, req: CreateUser) -> AppResult<Uuid> {
        let password_hash = hash_password(req.password).await?;

        let user = User {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            role: req.role,
            password_hash,
            created_at: Utc::now(),
            updated_at: None,
        };
        let id = user.id;

        self.users.write().await.insert(id, user);

        tracing::info!(user_id = %id, "Created user");
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users.read().await.get(&id).cloned().ok_or_not_found()
    }

    async fn update(&self, id: Uuid, changes: UpdateUser) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_not_found()?;
        user.apply(changes, Utc::now());

        tracing::info!(user_id = %id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.users.write().await.remove(&id).is_some();

        tracing::info!(user_id = %id, removed, "Deleted user");
        Ok(())
    }
}
