//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::Principal;
use crate::domain::entities::token::TokenType;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthenticatedUser, LoginResponse, RenewResponse, UserDetail};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RevocationStore, SessionRepository, UserRepository};
use crate::services::session::SessionService;
use crate::services::store::bounded;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service exposing the public auth operations
pub struct AuthService<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: RevocationStore,
{
    /// Identity rows
    user_repository: Arc<U>,
    /// Session lifecycle
    session_service: Arc<SessionService<S, V>>,
    /// Token issuance and verification
    token_service: Arc<TokenService<V>>,
    config: AuthServiceConfig,
}

impl<U, S, V> AuthService<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: RevocationStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for identity rows
    /// * `session_service` - Session lifecycle service
    /// * `token_service` - Token service shared with `session_service`
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        session_service: Arc<SessionService<S, V>>,
        token_service: Arc<TokenService<V>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            session_service,
            token_service,
            config,
        }
    }

    /// Registers a new identity with the default role
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Validation)` - Missing email or short password
    /// * `Err(AuthError::UserAlreadyExists)` - Email taken
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if password.chars().count() < self.config.min_password_length {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }

        if self.find_user(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = User::new(name.trim().to_string(), email.to_string(), password_hash);

        let user = bounded(
            self.token_service.store_timeout(),
            "user create",
            self.user_repository.create(user),
        )
        .await
        .map_err(|e| match e {
            DomainError::Auth(AuthError::UserAlreadyExists) => e,
            other => {
                error!(email, error = %other, "Failed to create user");
                DomainError::internal("Failed to create user")
            }
        })?;

        info!(user_id = %user.id, email = %user.email, "User signed up");
        Ok(user)
    }

    /// Authenticates by email and password and opens a session
    ///
    /// Every credential failure carries the same message.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let user = self.find_user(email.trim()).await?.ok_or_else(|| {
            debug!(email, "Login for unknown email");
            AuthError::UserNotFound
        })?;

        if !verify_password(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login to inactive account");
            return Err(AuthError::AccountInactive.into());
        }

        let principal = Principal::from(&user);
        let (access_token, access_claims) = self.token_service.create_access_token(&principal)?;
        let (refresh_token, refresh_claims) = self.token_service.create_refresh_token(&principal)?;

        let session = self
            .session_service
            .create_session(&refresh_token, &refresh_claims)
            .await?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");

        Ok(LoginResponse {
            session_id: session.id,
            access_token,
            refresh_token,
            access_token_expires_at: access_claims.expires_at(),
            refresh_token_expires_at: refresh_claims.expires_at(),
            user: UserDetail::from(&user),
        })
    }

    /// Resolves the identity behind an access token
    pub async fn validate(&self, access_token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self
            .token_service
            .verify_token(access_token, TokenType::Access)
            .await
            .map_err(|e| {
                debug!(error = %e, "Access token rejected");
                AuthError::InvalidToken
            })?;

        Ok(AuthenticatedUser::from(claims))
    }

    /// Mints a new access token from a refresh token
    pub async fn renew_access_token(&self, refresh_token: &str) -> DomainResult<RenewResponse> {
        let (access_token, claims) = self
            .session_service
            .renew_access_token(refresh_token)
            .await?;

        Ok(RenewResponse {
            access_token,
            access_token_expires_at: claims.expires_at(),
        })
    }

    /// Ends the session behind `refresh_token` and revokes `access_token`
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> DomainResult<()> {
        self.session_service.logout(access_token, refresh_token).await
    }

    /// Forcibly blocks a session
    pub async fn revoke_session(&self, session_id: Uuid) -> DomainResult<()> {
        self.session_service.revoke_session(session_id).await
    }

    /// Removes a session row
    pub async fn delete_session(&self, session_id: Uuid) -> DomainResult<()> {
        self.session_service.delete_session(session_id).await
    }

    async fn find_user(&self, email: &str) -> DomainResult<Option<User>> {
        bounded(
            self.token_service.store_timeout(),
            "user lookup",
            self.user_repository.find_by_email(email),
        )
        .await
        .map_err(|e| {
            error!(email, error = %e, "Failed to load user");
            DomainError::internal("Failed to load user")
        })
    }
}
