//! Database repository for single-use token operations.
//!
//! A user has at most one live token at a time, shared by the verification
//! and reset flows. Reusing a live token for repeated "resend" requests
//! avoids store bloat and keeps the link the user already received valid.
//! `consume` is the atomic point of truth when two requests race on the
//! same token: exactly one delete wins.

use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::SingleUseToken;
use crate::utils::secret::generate_token_secret;

/// Tokens left unconsumed expire after this long, enforced at lookup time.
const TOKEN_TTL_HOURS: i64 = 24;

/// Repository for single-use token database operations.
pub struct TokenRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> TokenRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the user's live token, minting one if none exists.
    ///
    /// Concurrency-safe: the UNIQUE(user_id) constraint plus
    /// `ON CONFLICT DO NOTHING` means two racing callers both end up
    /// reading the single surviving row.
    pub async fn get_or_create(&self, user_id: &str) -> Result<SingleUseToken> {
        self.purge_expired(user_id).await?;

        if let Some(token) = self.find_live(user_id).await? {
            return Ok(token);
        }

        let id = Uuid::now_v7().to_string();
        let secret = generate_token_secret();
        let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

        sqlx::query(
            "INSERT INTO single_use_tokens (id, user_id, secret, expires_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(&id)
        .bind(user_id)
        .bind(&secret)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        let token = self
            .find_live(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("token row missing after insert"))?;

        Ok(token)
    }

    /// Retrieves the user's live token, if any.
    pub async fn find_live(&self, user_id: &str) -> Result<Option<SingleUseToken>> {
        let now = Utc::now();
        let token = sqlx::query_as::<_, SingleUseToken>(
            "SELECT id, user_id, secret, created_at, expires_at
             FROM single_use_tokens
             WHERE user_id = ? AND expires_at > ?",
        )
        .bind(user_id)
        .bind(now)
        .fetch_optional(self.pool)
        .await?;

        Ok(token)
    }

    /// Looks up a token by owner and secret. Expired tokens are treated as
    /// absent.
    pub async fn find(&self, user_id: &str, secret: &str) -> Result<Option<SingleUseToken>> {
        let now = Utc::now();
        let token = sqlx::query_as::<_, SingleUseToken>(
            "SELECT id, user_id, secret, created_at, expires_at
             FROM single_use_tokens
             WHERE user_id = ? AND secret = ? AND expires_at > ?",
        )
        .bind(user_id)
        .bind(secret)
        .bind(now)
        .fetch_optional(self.pool)
        .await?;

        Ok(token)
    }

    /// Deletes a token by id.
    ///
    /// Delete-if-exists semantics: of two racing consumers exactly one sees
    /// `true`, the other observes the token as already gone.
    pub async fn consume(&self, token_id: &str) -> Result<bool> {
        let rows_affected = sqlx::query("DELETE FROM single_use_tokens WHERE id = ?")
            .bind(token_id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Deletes every token owned by the user. Used on account deletion.
    pub async fn delete_all_for_user(&self, user_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM single_use_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    async fn purge_expired(&self, user_id: &str) -> Result<()> {
        let now = Utc::now();
        sqlx::query("DELETE FROM single_use_tokens WHERE user_id = ? AND expires_at <= ?")
            .bind(user_id)
            .bind(now)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
