//! User repository implementation backed by PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::changeset::UserChangeset;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::hash_password;
use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The repository is the only layer that touches storage. It does not
/// re-validate business rules.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Hash the password and insert a new user, returning its ID
    async fn create(&self, req: CreateUser) -> AppResult<Uuid>;

    /// Fetch a user by ID (`NotFound` when absent)
    async fn get(&self, id: Uuid) -> AppResult<User>;

    /// Apply a partial update (`NotFound` when no row matches)
    async fn update(&self, id: Uuid, changes: UpdateUser) -> AppResult<()>;

    /// Hard delete; deleting a missing user is not an error
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over a SeaORM connection pool
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Release the underlying connection.
    pub fn into_connection(self) -> DatabaseConnection {
        self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, req: CreateUser) -> AppResult<Uuid> {
        let password_hash = hash_password(req.password).await?;

        let id = Uuid::new_v4();
        let active_model = ActiveModel {
            id: Set(id),
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(password_hash),
            role: Set(req.role.code()),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        UserEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        info!(user_id = %id, "Created user");
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        debug!(user_id = %id, "Fetching user");

        let model = UserEntity::find()
            .filter(user::Column::Id.eq(id))
            .order_by_asc(user::Column::Id)
            .limit(1)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        Ok(User::from(model))
    }

    async fn update(&self, id: Uuid, changes: UpdateUser) -> AppResult<()> {
        let result = UserChangeset::new(changes, Utc::now())
            .into_update(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        info!(user_id = %id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        info!(user_id = %id, rows = result.rows_affected, "Deleted user");
        Ok(())
    }
}
