//! Shared application state assembled once at startup.
//!
//! All process-wide configuration (the signing secret, the mail transport,
//! the Google verifier) lives here and is injected into handlers through an
//! axum `Extension`. Nothing reads the environment after boot.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::services::email_service::Mailer;
use crate::services::google_verifier::IdentityVerifier;
use crate::utils::jwt::SessionTokens;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_tokens: Arc<SessionTokens>,
    /// `None` when SMTP is not configured; sends are skipped with a warning.
    pub mailer: Option<Arc<dyn Mailer>>,
    /// `None` when no Google client id is configured; Google login then
    /// fails closed.
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
    /// Public origin embedded in verification and reset links.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        config: &Config,
        mailer: Option<Arc<dyn Mailer>>,
        verifier: Option<Arc<dyn IdentityVerifier>>,
    ) -> Self {
        Self {
            pool,
            session_tokens: Arc::new(SessionTokens::new(&config.jwt_secret)),
            mailer,
            verifier,
            base_url: config.base_url.clone(),
        }
    }
}
