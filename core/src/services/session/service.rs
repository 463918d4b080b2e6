//! Session service implementation

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::entities::token::{Claims, TokenType};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::revocation::RevocationStore;
use crate::repositories::session::SessionRepository;
use crate::services::store::bounded;
use crate::services::token::TokenService;

/// Service managing the sessions that back refresh tokens
pub struct SessionService<S: SessionRepository, V: RevocationStore> {
    repository: S,
    token_service: Arc<TokenService<V>>,
}

impl<S: SessionRepository, V: RevocationStore> SessionService<S, V> {
    /// Creates a new session service
    ///
    /// # Arguments
    ///
    /// * `repository` - Session persistence
    /// * `token_service` - Shared token service used to verify and mint tokens
    pub fn new(repository: S, token_service: Arc<TokenService<V>>) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    /// Persists the session backing a freshly minted refresh token
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The signed refresh token
    /// * `claims` - Its claims; the JWT ID becomes the session id
    pub async fn create_session(
        &self,
        refresh_token: &str,
        claims: &Claims,
    ) -> Result<Session, DomainError> {
        let id = claims
            .token_id()
            .map_err(|_| DomainError::internal("Refresh token id is not a UUID"))?;
        let session = Session::new(
            id,
            claims.email.clone(),
            refresh_token.to_string(),
            claims.expires_at(),
        );

        let session = bounded(
            self.token_service.store_timeout(),
            "session create",
            self.repository.create_session(session),
        )
        .await
        .map_err(|e| {
            error!(session_id = %id, email = %claims.email, error = %e, "Failed to create session");
            DomainError::internal("Failed to create session")
        })?;

        info!(session_id = %session.id, email = %session.email, "Session created");
        Ok(session)
    }

    /// Mints a new access token for a live session
    ///
    /// The refresh token and its session are left untouched.
    ///
    /// # Returns
    ///
    /// * `Ok((String, Claims))` - New access token and its claims
    /// * `Err(TokenError)` - Refresh token invalid, session blocked,
    ///   mismatched or expired
    /// * `Err(DomainError::Internal)` - Session row missing or store failure
    pub async fn renew_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<(String, Claims), DomainError> {
        let claims = self
            .token_service
            .verify_token(refresh_token, TokenType::Refresh)
            .await?;

        let session = self.load_session(&claims).await?;

        if session.is_blocked {
            warn!(session_id = %session.id, "Renewal attempted on blocked session");
            return Err(TokenError::SessionBlocked.into());
        }

        if session.email != claims.email || session.refresh_token != refresh_token {
            warn!(session_id = %session.id, email = %claims.email, "Session does not match refresh token");
            return Err(TokenError::SessionMismatch.into());
        }

        if session.is_expired_at(Utc::now()) {
            return Err(TokenError::SessionExpired.into());
        }

        self.token_service.create_access_token(&claims.principal())
    }

    /// Ends a session
    ///
    /// Blacklists the access token and blocks the session behind the
    /// refresh token. Repeating a completed logout succeeds.
    ///
    /// # Arguments
    ///
    /// * `access_token` - The caller's access token
    /// * `refresh_token` - The refresh token of the session to end
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> Result<(), DomainError> {
        match self
            .token_service
            .verify_token(access_token, TokenType::Access)
            .await
        {
            Ok(_) => self.token_service.blacklist_access_token(access_token).await.map_err(|e| {
                error!(error = %e, "Error logging user out");
                DomainError::internal("Error logging user out")
            })?,
            // already revoked by an earlier logout; still must be ours
            Err(DomainError::Token(TokenError::Blacklisted)) => {
                self.token_service
                    .decode_token(access_token, TokenType::Access)
                    .map_err(|_| AuthError::InvalidAccessToken)?;
            }
            Err(DomainError::Token(TokenError::RevocationUnavailable)) => {
                error!("Revocation store unavailable during logout");
                return Err(DomainError::internal("Error logging user out"));
            }
            Err(e) => {
                warn!(error = %e, "Logout with invalid access token");
                return Err(AuthError::InvalidAccessToken.into());
            }
        }

        let claims = self
            .token_service
            .verify_token(refresh_token, TokenType::Refresh)
            .await
            .map_err(|e| match e {
                DomainError::Token(TokenError::RevocationUnavailable) => {
                    error!("Revocation store unavailable during logout");
                    DomainError::internal("Error logging user out")
                }
                other => {
                    warn!(error = %other, "Logout with invalid refresh token");
                    AuthError::InvalidRefreshToken.into()
                }
            })?;

        let session = self.load_session(&claims).await?;

        if session.is_blocked {
            warn!(session_id = %session.id, "Session already blocked");
            return Ok(());
        }

        self.block(session.id).await?;
        info!(session_id = %session.id, email = %session.email, "User logged out");
        Ok(())
    }

    /// Forcibly blocks a session
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Session is blocked, whether by this call or earlier
    /// * `Err(DomainError::NotFound)` - No such session
    pub async fn revoke_session(&self, id: Uuid) -> Result<(), DomainError> {
        let session = self.find(id).await?.ok_or_else(|| DomainError::not_found("Session"))?;

        if session.is_blocked {
            return Ok(());
        }

        self.block(id).await?;
        info!(session_id = %id, email = %session.email, "Session revoked");
        Ok(())
    }

    /// Removes a session row
    pub async fn delete_session(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = bounded(
            self.token_service.store_timeout(),
            "session delete",
            self.repository.delete_session_by_id(id),
        )
        .await
        .map_err(|e| {
            error!(session_id = %id, error = %e, "Failed to delete session");
            DomainError::internal("Failed to delete session")
        })?;

        if !deleted {
            return Err(DomainError::not_found("Session"));
        }

        info!(session_id = %id, "Session deleted");
        Ok(())
    }

    /// Looks up a session by id
    pub async fn find(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        bounded(
            self.token_service.store_timeout(),
            "session lookup",
            self.repository.get_session_by_id(id),
        )
        .await
        .map_err(|e| {
            error!(session_id = %id, error = %e, "Failed to load session");
            DomainError::internal("Failed to load session")
        })
    }

    /// Loads the session behind verified refresh claims. A missing row means
    /// the stores disagree and is reported as internal.
    async fn load_session(&self, claims: &Claims) -> Result<Session, DomainError> {
        let id = claims
            .token_id()
            .map_err(|_| DomainError::internal("Refresh token id is not a UUID"))?;

        self.find(id).await?.ok_or_else(|| {
            error!(session_id = %id, email = %claims.email, "No session for valid refresh token");
            DomainError::internal("Session not found")
        })
    }

    async fn block(&self, id: Uuid) -> Result<(), DomainError> {
        let blocked = bounded(
            self.token_service.store_timeout(),
            "session block",
            self.repository.block_session_by_id(id, Utc::now()),
        )
        .await
        .map_err(|e| {
            error!(session_id = %id, error = %e, "Failed to block session");
            DomainError::internal("Failed to block session")
        })?;

        if !blocked {
            return Err(DomainError::internal("Session disappeared before it could be blocked"));
        }
        Ok(())
    }
}
