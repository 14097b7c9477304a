//! Global application error types and handlers.
//!
//! This module defines the error taxonomy shared across the backend and
//! provides helper constructors for consistent error handling. Every
//! variant maps to exactly one HTTP status in `api::common`.

use thiserror::Error;

/// Generic service error covering all business-rule and infrastructure failures
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    /// Identical for missing account and wrong password, so callers
    /// cannot enumerate registered emails.
    #[error("Invalid email or password")]
    InvalidCredential,

    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("An email has been sent to your account, please verify")]
    EmailNotVerified,

    /// Password reset deliberately reveals account existence, unlike login.
    #[error("There is no user with this email")]
    UnknownEmail,

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
