//! Core business logic for the authentication system.
//!
//! The orchestrator composes the account store, the single-use token store,
//! the password hasher, the session token codec, the mail transport and the
//! federated identity verifier. It is stateless between requests; all
//! durable state lives in the stores, and correctness under concurrency
//! relies on their atomicity (uniqueness constraints for registration,
//! delete-if-exists for token consumption).

use std::sync::Arc;

use validator::Validate;

use crate::api::common::first_validation_error;
use crate::auth::models::*;
use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::token_repository::TokenRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::google_verifier::FederatedIdentity;
use crate::state::AppState;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::secret::generate_token_secret;
use uuid::Uuid;

/// Authentication service handling registration, login, email verification,
/// password reset and federated login.
pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.state.pool)
    }

    fn tokens(&self) -> TokenRepository<'_> {
        TokenRepository::new(&self.state.pool)
    }

    /// Register a new account and dispatch the verification email.
    ///
    /// The email is best-effort: the account exists whether or not dispatch
    /// succeeds, so a transport failure is logged and swallowed.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        if let Err(errors) = request.validate() {
            return Err(first_validation_error(errors));
        }

        // Pre-check is an optimization only; the UNIQUE constraint below is
        // the authority under concurrent registration.
        if self.users().email_exists(&request.email).await? {
            return Err(ServiceError::already_exists("email", &request.email));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users()
            .create_user(CreateUser {
                id: Uuid::now_v7().to_string(),
                username: request.username.clone(),
                email: request.email.clone(),
                password_hash,
                verified: false,
            })
            .await
            .map_err(|e| Self::map_create_error(e, &request.email, &request.username))?;

        let token = self.tokens().get_or_create(&user.id).await?;
        self.send_verification_email(&user, &token.secret).await;

        Ok(user)
    }

    /// Authenticate by email and password and issue a session token.
    ///
    /// A missing account and a wrong password fail identically. An
    /// unverified account is told to check its mailbox instead; a fresh
    /// verification email goes out only when no live token existed.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<String> {
        if let Err(errors) = request.validate() {
            return Err(first_validation_error(errors));
        }

        let user = self
            .users()
            .get_user_by_email_with_password(&request.email)
            .await?
            .ok_or(ServiceError::InvalidCredential)?;

        if !verify_password(&request.password, &user.password_hash) {
            return Err(ServiceError::InvalidCredential);
        }

        if !user.verified {
            if self.tokens().find_live(&user.id).await?.is_none() {
                let token = self.tokens().get_or_create(&user.id).await?;
                let link = format!(
                    "{}/users/{}/verify/{}",
                    self.state.base_url, user.id, token.secret
                );
                self.try_send_email(&user.email, "Verify Email", &link).await;
            }
            return Err(ServiceError::EmailNotVerified);
        }

        self.state.session_tokens.issue(&user.id)
    }

    /// Complete email verification from the emailed link.
    ///
    /// `consume` is the winner-selection point: of two racing calls exactly
    /// one deletes the token, the other fails with InvalidToken.
    pub async fn verify_email(&self, user_id: &str, secret: &str) -> ServiceResult<()> {
        let user = self
            .users()
            .get_user_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidUser)?;

        if user.verified {
            return Err(ServiceError::AlreadyVerified);
        }

        let token = self
            .tokens()
            .find(&user.id, secret)
            .await?
            .ok_or(ServiceError::InvalidToken)?;

        if !self.tokens().consume(&token.id).await? {
            return Err(ServiceError::InvalidToken);
        }

        self.users().set_verified(&user.id).await?;
        Ok(())
    }

    /// Send (or re-send) a password reset link.
    ///
    /// Unlike login, this path reveals whether the email is registered;
    /// that asymmetry is the documented contract.
    pub async fn request_password_reset(
        &self,
        request: PasswordResetRequest,
    ) -> ServiceResult<()> {
        if let Err(errors) = request.validate() {
            return Err(first_validation_error(errors));
        }

        let user = self
            .users()
            .get_user_by_email(&request.email)
            .await?
            .ok_or(ServiceError::UnknownEmail)?;

        let token = self.tokens().get_or_create(&user.id).await?;
        let link = format!(
            "{}/password-reset/{}/{}",
            self.state.base_url, user.id, token.secret
        );
        self.try_send_email(&user.email, "Reset Password", &link).await;

        Ok(())
    }

    /// Check a reset link without consuming it, so the form can be shown
    /// only for valid URLs.
    pub async fn validate_reset_link(&self, user_id: &str, secret: &str) -> ServiceResult<()> {
        let user = self
            .users()
            .get_user_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidUser)?;

        self.tokens()
            .find(&user.id, secret)
            .await?
            .ok_or(ServiceError::InvalidToken)?;

        Ok(())
    }

    /// Set a new password from the emailed reset link.
    ///
    /// A successful reset proves mailbox ownership, so the account is marked
    /// verified unconditionally.
    pub async fn confirm_password_reset(
        &self,
        user_id: &str,
        secret: &str,
        request: ConfirmPasswordResetRequest,
    ) -> ServiceResult<()> {
        let user = self
            .users()
            .get_user_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidUser)?;

        let token = self
            .tokens()
            .find(&user.id, secret)
            .await?
            .ok_or(ServiceError::InvalidToken)?;

        if let Err(errors) = request.validate() {
            return Err(first_validation_error(errors));
        }

        if !self.tokens().consume(&token.id).await? {
            return Err(ServiceError::InvalidToken);
        }

        self.users().set_verified(&user.id).await?;

        let password_hash = hash_password(&request.password)?;
        self.users().set_password(&user.id, &password_hash).await?;

        Ok(())
    }

    /// Exchange a Google ID token for a local session token, creating a
    /// verified account on first login.
    pub async fn login_with_google(&self, request: GoogleLoginRequest) -> ServiceResult<String> {
        if let Err(errors) = request.validate() {
            return Err(first_validation_error(errors));
        }

        let Some(verifier) = self.state.verifier.as_ref() else {
            tracing::warn!("Google login attempted but no client id is configured");
            return Err(ServiceError::InvalidCredential);
        };

        let identity = verifier.verify(&request.credential).await?;

        let user = match self.users().get_user_by_email(&identity.email).await? {
            Some(user) => user,
            None => self.create_federated_user(&identity).await?,
        };

        self.state.session_tokens.issue(&user.id)
    }

    /// Delete an account and cascade-delete its single-use tokens.
    pub async fn delete_user(&self, id: &str) -> ServiceResult<()> {
        self.users()
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        self.users().delete_user(id).await?;
        self.tokens().delete_all_for_user(id).await?;

        Ok(())
    }

    /// Load the authenticated user's public record.
    pub async fn current_user(&self, id: &str) -> ServiceResult<User> {
        self.users()
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// Creates an account for a first-time federated login. The account is
    /// trusted as verified and carries a random password hash until the
    /// user performs a reset.
    async fn create_federated_user(&self, identity: &FederatedIdentity) -> ServiceResult<User> {
        let mut username = identity
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| {
                identity
                    .email
                    .split('@')
                    .next()
                    .unwrap_or(&identity.email)
                    .to_string()
            });

        if username.len() < 3 || self.users().username_exists(&username).await? {
            let suffix = generate_token_secret();
            username = format!("{}-{}", username, &suffix[..6]);
        }

        let password_hash = hash_password(&generate_token_secret())?;

        let created = self
            .users()
            .create_user(CreateUser {
                id: Uuid::now_v7().to_string(),
                username,
                email: identity.email.clone(),
                password_hash,
                verified: true,
            })
            .await;

        match created {
            Ok(user) => Ok(user),
            // Lost a race against a concurrent first login for the same
            // email; the surviving row is the account.
            Err(e) if Self::is_unique_violation(&e) => self
                .users()
                .get_user_by_email(&identity.email)
                .await?
                .ok_or_else(|| ServiceError::internal_error("user vanished after conflict")),
            Err(e) => Err(ServiceError::Database { source: e.into() }),
        }
    }

    async fn send_verification_email(&self, user: &User, secret: &str) {
        let link = format!(
            "{}/users/{}/verify/{}",
            self.state.base_url, user.id, secret
        );
        self.try_send_email(&user.email, "Verify Email", &link).await;
    }

    /// Attempts to send an email, logging but never failing the operation.
    async fn try_send_email(&self, to_email: &str, subject: &str, link: &str) {
        match self.state.mailer.as_deref() {
            Some(mailer) => match mailer.send(to_email, subject, link).await {
                Ok(()) => tracing::info!("Email sent to {to_email}"),
                Err(e) => tracing::error!("Failed to send email to {to_email}: {e}"),
            },
            None => {
                tracing::warn!("Email transport not configured, not sending to {to_email}")
            }
        }
    }

    fn is_unique_violation(error: &sqlx::Error) -> bool {
        error
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    }

    fn map_create_error(error: sqlx::Error, email: &str, username: &str) -> ServiceError {
        if let Some(db) = error.as_database_error() {
            if db.is_unique_violation() {
                if db.message().contains("users.username") {
                    return ServiceError::already_exists("username", username);
                }
                return ServiceError::already_exists("email", email);
            }
        }
        ServiceError::Database {
            source: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::email_service::Mailer;
    use crate::services::google_verifier::IdentityVerifier;
    use crate::utils::jwt::SessionTokens;
    use async_trait::async_trait;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingMailer {
        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to_email: &str, subject: &str, link: &str) -> ServiceResult<()> {
            self.sent.lock().unwrap().push((
                to_email.to_string(),
                subject.to_string(),
                link.to_string(),
            ));
            Ok(())
        }
    }

    struct StubVerifier {
        identity: FederatedIdentity,
    }

    #[async_trait]
    impl IdentityVerifier for StubVerifier {
        async fn verify(&self, _credential: &str) -> ServiceResult<FederatedIdentity> {
            Ok(self.identity.clone())
        }
    }

    struct FailingVerifier;

    #[async_trait]
    impl IdentityVerifier for FailingVerifier {
        async fn verify(&self, _credential: &str) -> ServiceResult<FederatedIdentity> {
            Err(ServiceError::InvalidCredential)
        }
    }

    async fn test_state(
        mailer: Option<Arc<RecordingMailer>>,
        verifier: Option<Arc<dyn IdentityVerifier>>,
    ) -> AppState {
        // A single connection keeps every query on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();

        AppState {
            pool,
            session_tokens: Arc::new(SessionTokens::new("test-secret-key")),
            mailer: mailer.map(|m| m as Arc<dyn Mailer>),
            verifier,
            base_url: "http://localhost:5173".to_string(),
        }
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "willian".to_string(),
            email: "w@x.com".to_string(),
            password: "password123".to_string(),
        }
    }

    async fn token_count(state: &AppState) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM single_use_tokens")
            .fetch_one(&state.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_creates_unverified_user_and_sends_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let state = test_state(Some(mailer.clone()), None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        assert!(!user.verified);
        assert_eq!(user.email, "w@x.com");

        assert_eq!(token_count(&state).await, 1);
        assert_eq!(mailer.sent_count(), 1);

        let (to, subject, link) = mailer.sent.lock().unwrap()[0].clone();
        assert_eq!(to, "w@x.com");
        assert_eq!(subject, "Verify Email");
        assert!(link.contains(&format!("/users/{}/verify/", user.id)));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_shape() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let result = service
            .register(RegisterRequest {
                username: "wi".to_string(),
                email: "invalid".to_string(),
                password: "123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        service.register(register_request()).await.unwrap();

        let second = service
            .register(RegisterRequest {
                username: "someone-else".to_string(),
                ..register_request()
            })
            .await;
        assert!(matches!(second, Err(ServiceError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_login_does_not_distinguish_missing_user_from_wrong_password() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        service.register(register_request()).await.unwrap();

        let missing = service
            .login(LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "password123".to_string(),
            })
            .await;
        let wrong = service
            .login(LoginRequest {
                email: "w@x.com".to_string(),
                password: "wrongpassword".to_string(),
            })
            .await;

        assert!(matches!(missing, Err(ServiceError::InvalidCredential)));
        assert!(matches!(wrong, Err(ServiceError::InvalidCredential)));
    }

    #[tokio::test]
    async fn test_login_unverified_fails_and_resends_only_without_live_token() {
        let mailer = Arc::new(RecordingMailer::default());
        let state = test_state(Some(mailer.clone()), None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        assert_eq!(mailer.sent_count(), 1);

        // Correct password, unverified account: blocked, but no second
        // email while the registration token is still live.
        let login = LoginRequest {
            email: "w@x.com".to_string(),
            password: "password123".to_string(),
        };
        let result = service
            .login(LoginRequest {
                email: login.email.clone(),
                password: login.password.clone(),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::EmailNotVerified)));
        assert_eq!(mailer.sent_count(), 1);

        // Once the token is gone a retry mints a new one and re-sends.
        let token = TokenRepository::new(&state.pool)
            .find_live(&user.id)
            .await
            .unwrap()
            .unwrap();
        TokenRepository::new(&state.pool)
            .consume(&token.id)
            .await
            .unwrap();

        let result = service.login(login).await;
        assert!(matches!(result, Err(ServiceError::EmailNotVerified)));
        assert_eq!(mailer.sent_count(), 2);
    }

    #[tokio::test]
    async fn test_verify_email_then_login() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        let token = TokenRepository::new(&state.pool)
            .find_live(&user.id)
            .await
            .unwrap()
            .unwrap();

        service.verify_email(&user.id, &token.secret).await.unwrap();

        let stored = UserRepository::new(&state.pool)
            .get_user_by_id(&user.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.verified);
        assert_eq!(token_count(&state).await, 0);

        // Verifying again reports the terminal state, not a server error.
        let again = service.verify_email(&user.id, &token.secret).await;
        assert!(matches!(again, Err(ServiceError::AlreadyVerified)));

        let session = service
            .login(LoginRequest {
                email: "w@x.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        let claims = state.session_tokens.parse(&session).unwrap();
        assert_eq!(claims.user_id(), user.id);
    }

    #[tokio::test]
    async fn test_verify_email_rejects_bad_inputs() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();

        let unknown_user = service.verify_email("no-such-id", "whatever").await;
        assert!(matches!(unknown_user, Err(ServiceError::InvalidUser)));

        let wrong_secret = service.verify_email(&user.id, "not-the-secret").await;
        assert!(matches!(wrong_secret, Err(ServiceError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_consume_is_single_use() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        let tokens = TokenRepository::new(&state.pool);
        let token = tokens.find_live(&user.id).await.unwrap().unwrap();

        assert!(tokens.consume(&token.id).await.unwrap());
        assert!(!tokens.consume(&token.id).await.unwrap());
        assert!(tokens.find(&user.id, &token.secret).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_token_is_absent_and_replaced() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        let tokens = TokenRepository::new(&state.pool);
        let token = tokens.find_live(&user.id).await.unwrap().unwrap();

        // Backdate the token past its lifetime.
        sqlx::query("UPDATE single_use_tokens SET expires_at = ? WHERE id = ?")
            .bind(chrono::Utc::now() - chrono::Duration::hours(1))
            .bind(&token.id)
            .execute(&state.pool)
            .await
            .unwrap();

        // Expiry is enforced at lookup: the row still exists but both
        // lookups treat it as absent.
        assert_eq!(token_count(&state).await, 1);
        assert!(tokens.find(&user.id, &token.secret).await.unwrap().is_none());
        assert!(tokens.find_live(&user.id).await.unwrap().is_none());

        // The stale link is dead for verification too.
        let result = service.verify_email(&user.id, &token.secret).await;
        assert!(matches!(result, Err(ServiceError::InvalidToken)));

        // get_or_create purges the expired row and mints a fresh secret.
        let fresh = tokens.get_or_create(&user.id).await.unwrap();
        assert_ne!(fresh.secret, token.secret);
        assert_eq!(token_count(&state).await, 1);
    }

    #[tokio::test]
    async fn test_reset_request_reuses_live_token() {
        let mailer = Arc::new(RecordingMailer::default());
        let state = test_state(Some(mailer.clone()), None).await;
        let service = AuthService::new(&state);

        let unknown = service
            .request_password_reset(PasswordResetRequest {
                email: "nobody@x.com".to_string(),
            })
            .await;
        assert!(matches!(unknown, Err(ServiceError::UnknownEmail)));

        service.register(register_request()).await.unwrap();

        for _ in 0..2 {
            service
                .request_password_reset(PasswordResetRequest {
                    email: "w@x.com".to_string(),
                })
                .await
                .unwrap();
        }

        // Two requests in a row reuse the single live token.
        assert_eq!(token_count(&state).await, 1);
        // Registration plus both reset requests each sent an email.
        assert_eq!(mailer.sent_count(), 3);
    }

    #[tokio::test]
    async fn test_confirm_password_reset_flow() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        let token = TokenRepository::new(&state.pool)
            .find_live(&user.id)
            .await
            .unwrap()
            .unwrap();

        let short = service
            .confirm_password_reset(
                &user.id,
                &token.secret,
                ConfirmPasswordResetRequest {
                    password: "12345".to_string(),
                },
            )
            .await;
        assert!(matches!(short, Err(ServiceError::Validation { .. })));

        service
            .confirm_password_reset(
                &user.id,
                &token.secret,
                ConfirmPasswordResetRequest {
                    password: "new-password".to_string(),
                },
            )
            .await
            .unwrap();

        // Reset proves mailbox ownership: login now works with the new
        // password and the old one is dead.
        let old = service
            .login(LoginRequest {
                email: "w@x.com".to_string(),
                password: "password123".to_string(),
            })
            .await;
        assert!(matches!(old, Err(ServiceError::InvalidCredential)));

        service
            .login(LoginRequest {
                email: "w@x.com".to_string(),
                password: "new-password".to_string(),
            })
            .await
            .unwrap();

        // The token was consumed; a second confirmation loses.
        let replay = service
            .confirm_password_reset(
                &user.id,
                &token.secret,
                ConfirmPasswordResetRequest {
                    password: "another-one".to_string(),
                },
            )
            .await;
        assert!(matches!(replay, Err(ServiceError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_validate_reset_link() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        let token = TokenRepository::new(&state.pool)
            .find_live(&user.id)
            .await
            .unwrap()
            .unwrap();

        service
            .validate_reset_link(&user.id, &token.secret)
            .await
            .unwrap();

        let bad_user = service.validate_reset_link("no-such-id", &token.secret).await;
        assert!(matches!(bad_user, Err(ServiceError::InvalidUser)));

        let bad_secret = service.validate_reset_link(&user.id, "nope").await;
        assert!(matches!(bad_secret, Err(ServiceError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_delete_user_cascades_tokens() {
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);

        let user = service.register(register_request()).await.unwrap();
        assert_eq!(token_count(&state).await, 1);

        service.delete_user(&user.id).await.unwrap();
        assert_eq!(token_count(&state).await, 0);
        assert!(
            UserRepository::new(&state.pool)
                .get_user_by_id(&user.id)
                .await
                .unwrap()
                .is_none()
        );

        let again = service.delete_user(&user.id).await;
        assert!(matches!(again, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_google_login_creates_verified_account() {
        let verifier: Arc<dyn IdentityVerifier> = Arc::new(StubVerifier {
            identity: FederatedIdentity {
                email: "g@x.com".to_string(),
                display_name: Some("Willian Silva".to_string()),
            },
        });
        let state = test_state(None, Some(verifier)).await;
        let service = AuthService::new(&state);

        let session = service
            .login_with_google(GoogleLoginRequest {
                credential: "stub-credential".to_string(),
            })
            .await
            .unwrap();

        let claims = state.session_tokens.parse(&session).unwrap();
        let user = UserRepository::new(&state.pool)
            .get_user_by_id(claims.user_id())
            .await
            .unwrap()
            .unwrap();
        assert!(user.verified);
        assert_eq!(user.email, "g@x.com");

        // A second federated login reuses the same account.
        let session = service
            .login_with_google(GoogleLoginRequest {
                credential: "stub-credential".to_string(),
            })
            .await
            .unwrap();
        let claims = state.session_tokens.parse(&session).unwrap();
        assert_eq!(claims.user_id(), user.id);
    }

    #[tokio::test]
    async fn test_google_login_fails_closed() {
        let state = test_state(None, Some(Arc::new(FailingVerifier) as _)).await;
        let service = AuthService::new(&state);

        let result = service
            .login_with_google(GoogleLoginRequest {
                credential: "bad".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::InvalidCredential)));

        // Unconfigured verifier also fails closed.
        let state = test_state(None, None).await;
        let service = AuthService::new(&state);
        let result = service
            .login_with_google(GoogleLoginRequest {
                credential: "anything".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::InvalidCredential)));
    }
}
