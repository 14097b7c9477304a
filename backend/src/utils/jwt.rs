//! JWT session token utilities.
//!
//! Provides creation and validation of the stateless bearer credential
//! returned by login. Tokens carry only the subject id and expire five hours
//! after issuance; rotating the signing secret invalidates all outstanding
//! tokens, which is the only revocation mechanism.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};

/// Session lifetime, fixed at five hours from issuance.
const SESSION_TTL_HOURS: i64 = 5;

/// JWT claims for a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token issued at timestamp
    pub iat: usize,
    /// Token expiration timestamp
    pub exp: usize,
}

/// Session token codec, constructed once from the configured signing secret
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokens {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        SessionTokens {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed session token for the given user id.
    pub fn issue(&self, subject_id: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::hours(SESSION_TTL_HOURS);

        let claims = Claims {
            sub: subject_id.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {e}")))
    }

    /// Validate and decode a session token. Fails when the signature does not
    /// match, the payload is malformed, or the expiry has elapsed.
    pub fn parse(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::InvalidCredential)
    }
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}
