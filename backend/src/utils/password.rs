//! Password hashing helpers.
//!
//! Thin wrappers around bcrypt. Verification treats a malformed stored
//! digest as a mismatch rather than an error, so a corrupt row can never
//! turn a login failure into a 500.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::{ServiceError, ServiceResult};

/// Hash a plaintext password before storing it.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}
