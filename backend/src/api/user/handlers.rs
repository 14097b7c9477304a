//! Handler functions for user account endpoints: registration, email
//! verification and account deletion.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};

use crate::api::common::{MessageResponse, service_error_to_http};
use crate::auth::models::{RegisterRequest, RegisterResponse};
use crate::auth::service::AuthService;
use crate::state::AppState;

/// Handle account registration
#[axum::debug_handler]
pub async fn register(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, ResponseJson<RegisterResponse>), (StatusCode, ResponseJson<MessageResponse>)>
{
    let auth_service = AuthService::new(&state);

    match auth_service.register(payload).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            ResponseJson(RegisterResponse {
                id: user.id,
                message: "An email has been sent to your account, please verify".to_string(),
            }),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Complete email verification from the emailed link
#[axum::debug_handler]
pub async fn verify_email(
    Extension(state): Extension<AppState>,
    Path((user_id, token)): Path<(String, String)>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.verify_email(&user_id, &token).await {
        Ok(()) => Ok(ResponseJson(MessageResponse::new(
            "Email verified successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Delete an account and its outstanding tokens
#[axum::debug_handler]
pub async fn delete_user(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.delete_user(&user_id).await {
        Ok(()) => Ok(ResponseJson(MessageResponse::new(
            "User deleted successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
