//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server port, JWT signing secret, the public base URL
//! embedded in verification/reset links, SMTP credentials and the Google
//! OAuth client id. Loaded once at startup and injected everywhere else.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub server_port: u16,
    /// Public origin used to build verification and reset links.
    pub base_url: String,
    /// Expected audience for Google ID tokens. Google login is disabled
    /// when unset.
    pub google_client_id: Option<String>,
    smtp: Option<EmailConfig>,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let google_client_id = env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.is_empty());

        let smtp = Self::email_config_from_env()?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            server_port,
            base_url,
            google_client_id,
            smtp,
        })
    }

    /// SMTP settings, if configured. All of SMTP_HOST, SMTP_USERNAME and
    /// SMTP_PASSWORD must be present for email sending to be enabled.
    pub fn email_config(&self) -> Option<&EmailConfig> {
        self.smtp.as_ref()
    }

    fn email_config_from_env() -> Result<Option<EmailConfig>> {
        let (Ok(smtp_host), Ok(smtp_username), Ok(smtp_password)) = (
            env::var("SMTP_HOST"),
            env::var("SMTP_USERNAME"),
            env::var("SMTP_PASSWORD"),
        ) else {
            return Ok(None);
        };

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .context("SMTP_PORT must be a valid number")?;

        let from_email = env::var("FROM_EMAIL").unwrap_or_else(|_| smtp_username.clone());
        let from_name = env::var("FROM_NAME").unwrap_or_else(|_| "Auth".to_string());

        Ok(Some(EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            from_name,
        }))
    }
}
