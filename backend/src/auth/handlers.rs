//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for login (password and
//! Google), parse request data and interact with the `auth::service` for
//! core business logic.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};

use crate::api::common::{MessageResponse, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::database::models::User;
use crate::state::AppState;
use crate::utils::jwt::Claims;

/// Handle password login
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.login(payload).await {
        Ok(token) => Ok(ResponseJson(LoginResponse {
            data: token,
            message: "Logged in successfully".to_string(),
        })),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle federated login with a Google ID token
#[axum::debug_handler]
pub async fn google_login(
    Extension(state): Extension<AppState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.login_with_google(payload).await {
        Ok(token) => Ok(ResponseJson(LoginResponse {
            data: token,
            message: "Logged in successfully".to_string(),
        })),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Return the authenticated user's record, password hash omitted
#[axum::debug_handler]
pub async fn me(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<User>, (StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.current_user(claims.user_id()).await {
        Ok(user) => Ok(ResponseJson(user)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
