//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::domain::entities::token::{Claims, Principal, TokenType};
use crate::errors::{DomainError, TokenError};
use crate::repositories::revocation::{RevocationStore, BLACKLIST_MARKER};
use crate::services::store::bounded;

use super::config::TokenServiceConfig;

/// Service for issuing, verifying and revoking JWTs
pub struct TokenService<V: RevocationStore> {
    revocation_store: V,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<V: RevocationStore> TokenService<V> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `revocation_store` - Store holding blacklisted tokens
    /// * `config` - Token service configuration
    pub fn new(revocation_store: V, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            revocation_store,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn access_token_duration(&self) -> chrono::Duration {
        self.config.access_token_duration
    }

    pub fn refresh_token_duration(&self) -> chrono::Duration {
        self.config.refresh_token_duration
    }

    pub fn store_timeout(&self) -> Duration {
        self.config.store_timeout
    }

    /// Issues a signed token
    ///
    /// # Arguments
    ///
    /// * `principal` - Identity embedded in the claims
    /// * `duration` - Validity window starting now
    /// * `token_type` - Access or refresh
    ///
    /// # Returns
    ///
    /// * `Ok((String, Claims))` - The signed token and the claims it carries
    /// * `Err(DomainError::Internal)` - Signing failed
    pub fn create_token(
        &self,
        principal: &Principal,
        duration: chrono::Duration,
        token_type: TokenType,
    ) -> Result<(String, Claims), DomainError> {
        let claims = Claims::new(principal, duration, token_type);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!(error = %e, token_type = %token_type, "Failed to sign token");
                DomainError::internal("Token generation failed")
            })?;

        debug!(
            user_id = %claims.user_id,
            token_type = %token_type,
            jti = %claims.jti,
            "Issued token"
        );
        Ok((token, claims))
    }

    /// Issues an access token with the configured lifetime
    pub fn create_access_token(&self, principal: &Principal) -> Result<(String, Claims), DomainError> {
        self.create_token(principal, self.config.access_token_duration, TokenType::Access)
    }

    /// Issues a refresh token with the configured lifetime
    pub fn create_refresh_token(&self, principal: &Principal) -> Result<(String, Claims), DomainError> {
        self.create_token(principal, self.config.refresh_token_duration, TokenType::Refresh)
    }

    /// Verifies a token and returns its claims
    ///
    /// The revocation store is consulted before the token is parsed. A store
    /// failure or timeout rejects the token.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is live, correctly signed and of the expected kind
    /// * `Err(TokenError)` - Blacklisted, bad signature, expired, wrong kind or
    ///   revocation status unavailable
    pub async fn verify_token(&self, token: &str, expected: TokenType) -> Result<Claims, DomainError> {
        let marker = bounded(
            self.config.store_timeout,
            "revocation lookup",
            self.revocation_store.get(token),
        )
        .await
        .map_err(|e| {
            error!(error = %e, "Revocation store lookup failed, rejecting token");
            TokenError::RevocationUnavailable
        })?;

        if marker.is_some() {
            debug!(token_type = %expected, "Rejected blacklisted token");
            return Err(TokenError::Blacklisted.into());
        }

        self.decode_token(token, expected)
    }

    /// Checks signature, expiry and kind without consulting the revocation store
    pub fn decode_token(&self, token: &str, expected: TokenType) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::BadSignature,
            })?;

        let claims = token_data.claims;
        if claims.token_type != expected {
            warn!(
                expected = %expected,
                actual = %claims.token_type,
                jti = %claims.jti,
                "Token kind mismatch"
            );
            return Err(TokenError::WrongKind.into());
        }

        Ok(claims)
    }

    /// Records a revocation marker for `token`
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token string
    /// * `ttl` - How long the marker lives
    pub async fn blacklist_token(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        bounded(
            self.config.store_timeout,
            "revocation write",
            self.revocation_store.set(token, BLACKLIST_MARKER, ttl),
        )
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to blacklist token");
            DomainError::internal("Failed to blacklist token")
        })
    }

    /// Blacklists an access token for the full configured access lifetime
    pub async fn blacklist_access_token(&self, token: &str) -> Result<(), DomainError> {
        let ttl = self
            .config
            .access_token_duration
            .to_std()
            .map_err(|_| DomainError::internal("Access token duration must not be negative"))?;
        self.blacklist_token(token, ttl).await
    }
}
