//! Federated identity verification against Google.
//!
//! Exchanges the ID token posted by the client for a verified email and
//! display name. Verification is delegated to Google's tokeninfo endpoint,
//! which checks the signature and issuer; the audience and verified-email
//! claims are checked here. Fails closed: any network error, audience
//! mismatch or missing claim surfaces uniformly as an invalid credential.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::{ServiceError, ServiceResult};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Identity extracted from a successfully verified external token.
#[derive(Debug, Clone)]
pub struct FederatedIdentity {
    pub email: String,
    pub display_name: Option<String>,
}

/// Abstract federated identity verifier.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> ServiceResult<FederatedIdentity>;
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    email_verified: Option<String>,
    name: Option<String>,
}

/// Verifier backed by Google's tokeninfo endpoint.
pub struct GoogleVerifier {
    client: reqwest::Client,
    client_id: String,
}

impl GoogleVerifier {
    pub fn new(client_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id,
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, credential: &str) -> ServiceResult<FederatedIdentity> {
        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", credential)])
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Google tokeninfo request failed: {e}");
                ServiceError::InvalidCredential
            })?;

        if !response.status().is_success() {
            return Err(ServiceError::InvalidCredential);
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|_| ServiceError::InvalidCredential)?;

        if info.aud != self.client_id {
            tracing::warn!("Google token audience mismatch");
            return Err(ServiceError::InvalidCredential);
        }

        if info.email_verified.as_deref() != Some("true") {
            return Err(ServiceError::InvalidCredential);
        }

        let email = info.email.ok_or(ServiceError::InvalidCredential)?;

        Ok(FederatedIdentity {
            email,
            display_name: info.name,
        })
    }
}
