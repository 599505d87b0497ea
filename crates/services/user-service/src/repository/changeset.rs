//! Conditional SET-clause builder for user updates.

use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, IdenStatic, QueryFilter, UpdateMany, Value};
use uuid::Uuid;

use super::entities::user::{Column, Entity as UserEntity};
use domain::{UpdateUser, UserRole};

/// Accumulated `column = value` assignments for a single UPDATE.
///
/// Only supplied fields are recorded; absent fields never appear in the
/// statement. `updated_at` is always assigned.
#[derive(Debug, Clone)]
pub struct UserChangeset {
    updated_at: DateTime<Utc>,
    clauses: Vec<(Column, Value)>,
}

impl UserChangeset {
    /// Build the changeset for `changes`, stamped with `now`.
    pub fn new(changes: UpdateUser, now: DateTime<Utc>) -> Self {
        let mut clauses = Vec::with_capacity(3);

        if let Some(name) = changes.name {
            clauses.push((Column::Name, Value::from(name)));
        }
        if let Some(email) = changes.email {
            clauses.push((Column::Email, Value::from(email)));
        }
        // The unset sentinel must never overwrite a stored role
        if let Some(role) = changes.role.and_then(UserRole::specified) {
            clauses.push((Column::Role, Value::from(role.code())));
        }

        Self {
            updated_at: now,
            clauses,
        }
    }

    /// Names of the columns assigned besides `updated_at`, in statement order.
    pub fn columns(&self) -> Vec<String> {
        self.clauses
            .iter()
            .map(|(col, _)| col.as_str().to_owned())
            .collect()
    }

    /// Render into one UPDATE statement targeting `id`.
    pub fn into_update(self, id: Uuid) -> UpdateMany<UserEntity> {
        let mut update =
            UserEntity::update_many().col_expr(Column::UpdatedAt, Expr::value(self.updated_at));

        for (column, value) in self.clauses {
            update = update.col_expr(column, Expr::value(value));
        }

        update.filter(Column::Id.eq(id))
    }
}
