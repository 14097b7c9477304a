//! Database repository for user management operations.
//!
//! Provides CRUD operations for user accounts. Default reads omit the
//! password hash; the login path opts into it explicitly via
//! `get_user_by_email_with_password`.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{CreateUser, User, UserWithPassword};

const USER_COLUMNS: &str = "id, username, email, verified, created_at, updated_at";

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// The UNIQUE constraints on email and username are the authority of
    /// record for duplicates; callers map the constraint violation to a
    /// conflict error.
    pub async fn create_user(&self, user: CreateUser) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, username, email, password_hash, verified)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.verified)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their unique identifier. The password hash is
    /// not selected.
    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email. The password hash is not selected.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a full user row including the password hash. Only the
    /// login path should call this.
    pub async fn get_user_by_email_with_password(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, email, password_hash, verified, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Marks a user's email as verified. Verified is terminal and never
    /// reverts.
    ///
    /// # Returns
    /// `true` if a row was updated, `false` if the user does not exist
    pub async fn set_verified(&self, id: &str) -> Result<bool> {
        let rows_affected = sqlx::query(
            "UPDATE users SET verified = 1, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Replaces a user's password hash.
    pub async fn set_password(&self, id: &str, password_hash: &str) -> Result<bool> {
        let rows_affected = sqlx::query(
            "UPDATE users SET password_hash = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(password_hash)
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Deletes a user row.
    pub async fn delete_user(&self, id: &str) -> Result<bool> {
        let rows_affected = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Checks if a username already exists in the system.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
                .bind(username)
                .fetch_one(self.pool)
                .await?;

        Ok(count > 0)
    }

    /// Checks if an email already exists in the system.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
