//! Account repository: the only component that reads or writes accounts.

use axum::async_trait;
use sqlx::SqlitePool;

use super::account::{Admin, NewAdmin, NewUser, User};
use crate::{ClubAuthError, Result};

/// Storage operations for user and admin accounts.
///
/// Lookups compare with plain equality, so matching is case-sensitive.
/// Inserts report a taken username as [`ClubAuthError::Conflict`] even when a
/// concurrent signup slipped in between the caller's existence check and the
/// insert.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find a user by username.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find a user whose username, course and year all match.
    async fn find_user_by_credentials(
        &self,
        username: &str,
        course: &str,
        year: &str,
    ) -> Result<Option<User>>;

    /// Find an admin by admin username.
    async fn find_admin_by_username(&self, admin_username: &str) -> Result<Option<Admin>>;

    /// Find an admin whose admin username, role and club all match.
    async fn find_admin_by_credentials(
        &self,
        admin_username: &str,
        role: &str,
        club: &str,
    ) -> Result<Option<Admin>>;

    /// Insert a user and return the new ID.
    async fn insert_user(&self, new_user: &NewUser) -> Result<i64>;

    /// Insert an admin and return the new ID.
    async fn insert_admin(&self, new_admin: &NewAdmin) -> Result<i64>;
}

/// SQLite-backed account repository.
#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map insert failures, turning unique-constraint violations into conflicts.
fn map_insert_error(e: sqlx::Error, what: &str) -> ClubAuthError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ClubAuthError::Conflict(format!("{what} already exists"))
        }
        _ => ClubAuthError::Database(e.to_string()),
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, course, year, password_hash, created_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_credentials(
        &self,
        username: &str,
        course: &str,
        year: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, course, year, password_hash, created_at
             FROM users WHERE username = ? AND course = ? AND year = ?",
        )
        .bind(username)
        .bind(course)
        .bind(year)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_admin_by_username(&self, admin_username: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, admin_username, password_hash, role, club, created_at
             FROM admins WHERE admin_username = ?",
        )
        .bind(admin_username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn find_admin_by_credentials(
        &self,
        admin_username: &str,
        role: &str,
        club: &str,
    ) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, admin_username, password_hash, role, club, created_at
             FROM admins WHERE admin_username = ? AND role = ? AND club = ?",
        )
        .bind(admin_username)
        .bind(role)
        .bind(club)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn insert_user(&self, new_user: &NewUser) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, course, year, password_hash) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_user.username)
        .bind(&new_user.course)
        .bind(&new_user.year)
        .bind(&new_user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "username"))?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_admin(&self, new_admin: &NewAdmin) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO admins (admin_username, password_hash, role, club) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_admin.admin_username)
        .bind(&new_admin.password_hash)
        .bind(new_admin.role.as_str())
        .bind(&new_admin.club)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "admin username"))?;

        Ok(result.last_insert_rowid())
    }
}
