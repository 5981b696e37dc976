//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::user::{Role, User, UserRepository, UserStatus};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, password, role, status, created_at, updated_at
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row));
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password, role, status, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn insert(&self, mut user: User) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, role, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.password())
        .bind(role_to_str(user.role()))
        .bind(status_to_str(user.status()))
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email(), "create"))?;

        user.set_id(row.get("id"));
        Ok(user)
    }

    async fn replace(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, password = $4, role = $5, status = $6,
                created_at = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password())
        .bind(role_to_str(user.role()))
        .bind(status_to_str(user.status()))
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email(), "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        Ok(())
    }
}

fn map_write_error(e: sqlx::Error, email: &str, action: &str) -> DomainError {
    let msg = e.to_string();

    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        DomainError::conflict(format!("Email '{}' already exists", email))
    } else {
        DomainError::storage(format!("Failed to {} user: {}", action, e))
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    User::from_stored(
        row.get("id"),
        row.get::<String, _>("name"),
        row.get::<String, _>("email"),
        row.get::<String, _>("password"),
        str_to_role(&row.get::<String, _>("role")),
        str_to_status(&row.get::<String, _>("status")),
        row.get("created_at"),
        row.get("updated_at"),
    )
}

fn role_to_str(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
    }
}

fn str_to_role(s: &str) -> Role {
    match s {
        "admin" => Role::Admin,
        _ => Role::User,
    }
}

fn status_to_str(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "active",
        UserStatus::Inactive => "inactive",
        UserStatus::Banned => "banned",
    }
}

fn str_to_status(s: &str) -> UserStatus {
    match s {
        "inactive" => UserStatus::Inactive,
        "banned" => UserStatus::Banned,
        _ => UserStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion() {
        assert_eq!(role_to_str(Role::Admin), "admin");
        assert_eq!(role_to_str(Role::User), "user");

        assert_eq!(str_to_role("admin"), Role::Admin);
        assert_eq!(str_to_role("user"), Role::User);
        assert_eq!(str_to_role("unknown"), Role::User);
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(status_to_str(UserStatus::Active), "active");
        assert_eq!(status_to_str(UserStatus::Inactive), "inactive");
        assert_eq!(status_to_str(UserStatus::Banned), "banned");

        assert_eq!(str_to_status("active"), UserStatus::Active);
        assert_eq!(str_to_status("inactive"), UserStatus::Inactive);
        assert_eq!(str_to_status("banned"), UserStatus::Banned);
        assert_eq!(str_to_status("unknown"), UserStatus::Active);
    }
}
