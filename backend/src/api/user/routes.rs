//! Defines the HTTP routes for user account management.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::user::handlers::*;

/// Creates the user router with registration, verification and deletion
pub fn user_router() -> Router {
    Router::new()
        .route("/", post(register))
        .route("/{id}/verify/{token}", get(verify_email))
        .route("/{id}", delete(delete_user))
}
