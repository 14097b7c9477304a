//! Shared API response types and error mapping.
//!
//! Every endpoint answers with a JSON body carrying a human-readable
//! `message` (plus `id`/`data` on success). `service_error_to_http` is the
//! single place where the service-layer taxonomy is turned into status
//! codes, so the HTTP contract cannot drift per handler. Store errors are
//! logged and collapsed to an opaque 500; no internal detail reaches the
//! client.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Minimal `{message}` response body shared by most endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Converts a ServiceError to its HTTP status and JSON body.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::AlreadyExists { entity, .. } => (
            StatusCode::CONFLICT,
            format!("A user with this {entity} already exists"),
        ),
        ServiceError::UnknownEmail => (StatusCode::CONFLICT, error.to_string()),
        ServiceError::InvalidCredential => (StatusCode::UNAUTHORIZED, error.to_string()),
        ServiceError::InvalidUser
        | ServiceError::InvalidToken
        | ServiceError::AlreadyVerified
        | ServiceError::EmailNotVerified => (StatusCode::BAD_REQUEST, error.to_string()),
        ServiceError::NotFound { entity, .. } => {
            (StatusCode::NOT_FOUND, format!("{entity} not found"))
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {source}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(MessageResponse::new(message)))
}

/// Request fields in declaration order, so the reported error is stable
/// when several fields are invalid at once.
const FIELD_ORDER: &[&str] = &["username", "email", "password", "credential"];

/// Reports the first violated field from a validator run, matching the
/// one-error-at-a-time shape of the original form validation.
pub fn first_validation_error(errors: validator::ValidationErrors) -> ServiceError {
    let field_errors = errors.field_errors();

    let format_first = |field: &str, errors: &[validator::ValidationError]| {
        errors.first().map(|error| {
            format!(
                "{}: {}",
                field,
                error.message.as_ref().unwrap_or(&"Invalid value".into())
            )
        })
    };

    let message = FIELD_ORDER
        .iter()
        .find_map(|&field| {
            field_errors
                .get(field)
                .and_then(|errors| format_first(field, errors))
        })
        .or_else(|| {
            // Unlisted fields still report something sensible.
            field_errors
                .iter()
                .next()
                .and_then(|(field, errors)| format_first(field, errors))
        })
        .unwrap_or_else(|| "Invalid value".to_string());

    ServiceError::validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                service_error_to_http(ServiceError::validation("bad input")).0,
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::already_exists("User", "w@x.com")).0,
                StatusCode::CONFLICT,
            ),
            (
                service_error_to_http(ServiceError::UnknownEmail).0,
                StatusCode::CONFLICT,
            ),
            (
                service_error_to_http(ServiceError::InvalidCredential).0,
                StatusCode::UNAUTHORIZED,
            ),
            (
                service_error_to_http(ServiceError::InvalidToken).0,
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::EmailNotVerified).0,
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::not_found("User", "x")).0,
                StatusCode::NOT_FOUND,
            ),
            (
                service_error_to_http(ServiceError::internal_error("boom")).0,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (got, want) in cases {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_first_validation_error_is_deterministic() {
        use crate::auth::models::RegisterRequest;
        use validator::Validate;

        // Every field is invalid; the username violation must win each time
        // regardless of hash-map iteration order.
        let bad = RegisterRequest {
            username: "wi".to_string(),
            email: "invalid".to_string(),
            password: "123".to_string(),
        };

        for _ in 0..8 {
            let errors = bad.validate().unwrap_err();
            match first_validation_error(errors) {
                ServiceError::Validation { message } => {
                    assert!(message.starts_with("username:"), "got: {message}")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let (_, body) = service_error_to_http(ServiceError::Database {
            source: anyhow::anyhow!("connection refused on 10.0.0.3"),
        });
        assert_eq!(body.0.message, "Internal server error");
    }
}
