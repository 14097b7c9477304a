//! Defines the HTTP routes for password reset.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::password_reset::handlers::*;

/// Creates the password reset router
pub fn password_reset_router() -> Router {
    Router::new()
        .route("/", post(request_reset))
        .route(
            "/{id}/{token}",
            get(validate_reset_link).post(confirm_reset),
        )
}
