//! Data structures for authentication-related requests and responses.
//!
//! Each inbound shape gets its own typed validator; the constraints mirror
//! the account rules (username 3-255 chars, syntactically valid email,
//! password of at least 6 chars).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 255,
        message = "Username must be between 3-255 characters"
    ))]
    pub username: String,

    #[validate(email(message = "Must be a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Registration response carrying the new user's id
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub message: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response: the session token plus a success message
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: String,
    pub message: String,
}

/// Google login request carrying the ID token issued to the client
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1, message = "Credential is required"))]
    pub credential: String,
}

/// Password reset request payload
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
}

/// Password reset confirmation payload
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmPasswordResetRequest {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "willian".to_string(),
            email: "w@x.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short_username = RegisterRequest {
            username: "wi".to_string(),
            email: "w@x.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(short_username.validate().is_err());

        let bad_email = RegisterRequest {
            username: "willian".to_string(),
            email: "invalid".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            username: "willian".to_string(),
            email: "w@x.com".to_string(),
            password: "123".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "w@x.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing_password = LoginRequest {
            email: "w@x.com".to_string(),
            password: String::new(),
        };
        assert!(missing_password.validate().is_err());
    }

    #[test]
    fn test_confirm_reset_validation() {
        let short = ConfirmPasswordResetRequest {
            password: "12345".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = ConfirmPasswordResetRequest {
            password: "123456".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
