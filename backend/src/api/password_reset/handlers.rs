//! Handler functions for the password reset endpoints.
//!
//! The request endpoint always answers success once the account exists,
//! whatever happens to the outbound email. The GET endpoint lets the client
//! validate a reset link before showing the form.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};

use crate::api::common::{MessageResponse, service_error_to_http};
use crate::auth::models::{ConfirmPasswordResetRequest, PasswordResetRequest};
use crate::auth::service::AuthService;
use crate::state::AppState;

/// Request a password reset link by email
#[axum::debug_handler]
pub async fn request_reset(
    Extension(state): Extension<AppState>,
    Json(payload): Json<PasswordResetRequest>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.request_password_reset(payload).await {
        Ok(()) => Ok(ResponseJson(MessageResponse::new(
            "A password reset link has been sent to your email",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Check a reset link without consuming the token
#[axum::debug_handler]
pub async fn validate_reset_link(
    Extension(state): Extension<AppState>,
    Path((user_id, token)): Path<(String, String)>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.validate_reset_link(&user_id, &token).await {
        Ok(()) => Ok(ResponseJson(MessageResponse::new("Valid URL"))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Set a new password from the emailed reset link
#[axum::debug_handler]
pub async fn confirm_reset(
    Extension(state): Extension<AppState>,
    Path((user_id, token)): Path<(String, String)>,
    Json(payload): Json<ConfirmPasswordResetRequest>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service
        .confirm_password_reset(&user_id, &token, payload)
        .await
    {
        Ok(()) => Ok(ResponseJson(MessageResponse::new(
            "Password reset successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
