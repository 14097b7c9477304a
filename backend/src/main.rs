//! Main entry point for the authentication backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection, assembles the shared application state (session codec, mail
//! transport, Google verifier) and registers all API routes.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod state;
mod utils;

use std::sync::Arc;

use axum::{Extension, Router, response::Json, routing::get};
use tracing::{info, warn};
use tracing_subscriber::fmt::init;

use crate::config::Config;
use crate::database::Database;
use crate::services::email_service::{Mailer, SmtpMailer};
use crate::services::google_verifier::{GoogleVerifier, IdentityVerifier};
use crate::state::AppState;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();

    let mailer: Option<Arc<dyn Mailer>> = match config.email_config() {
        Some(email_config) => match SmtpMailer::new(email_config.clone()) {
            Ok(mailer) => Some(Arc::new(mailer)),
            Err(e) => {
                warn!("Failed to initialize mail transport: {e}. Emails will not be sent.");
                None
            }
        },
        None => {
            warn!("SMTP not configured. Emails will not be sent.");
            None
        }
    };

    let verifier: Option<Arc<dyn IdentityVerifier>> = match &config.google_client_id {
        Some(client_id) => Some(Arc::new(GoogleVerifier::new(client_id.clone()))),
        None => {
            warn!("GOOGLE_CLIENT_ID not set. Google login is disabled.");
            None
        }
    };

    let state = AppState::new(db.pool().clone(), &config, mailer, verifier);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/users", api::user::routes::user_router())
        .nest("/auth", auth::routes::auth_router(state.clone()))
        .nest(
            "/password-reset",
            api::password_reset::routes::password_reset_router(),
        )
        .layer(Extension(state));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting auth server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "Auth Backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
