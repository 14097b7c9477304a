//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models;
//! in particular, the password hash lives in a separate struct so that it is
//! only loaded where authentication explicitly needs it and can never leak
//! into a serialized response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as returned to callers. Deliberately has no password field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full user row including the bcrypt hash. Only the login path reads this.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithPassword {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verified: bool,
}

/// Single-use verification/reset token scoped to one user.
///
/// The secret is a bearer capability embedded in an emailed link; a token is
/// retired the moment it is consumed, and expired rows are ignored at lookup.
#[derive(Debug, Clone, FromRow)]
pub struct SingleUseToken {
    pub id: String,
    pub user_id: String,
    pub secret: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
