//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle password login, Google login and the authenticated
//! `me` endpoint. Designed to be nested into the main Axum router.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::handlers::*;
use crate::auth::middleware::jwt_auth;
use crate::state::AppState;

/// Creates the authentication router with all auth-related routes
pub fn auth_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/google", post(google_login))
        .route(
            "/me",
            get(me).layer(middleware::from_fn_with_state(state, jwt_auth)),
        )
}
