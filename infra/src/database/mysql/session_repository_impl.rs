//! MySQL implementation of the SessionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use taskhub_core::domain::entities::session::Session;
use taskhub_core::errors::DomainError;
use taskhub_core::repositories::SessionRepository;

use super::db_error;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_error("Failed to get id", e))?;

        Ok(Session {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid session UUID: {}", e)))?,
            email: row.try_get("email").map_err(|e| db_error("Failed to get email", e))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| db_error("Failed to get refresh_token", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("Failed to get expires_at", e))?,
            is_blocked: row
                .try_get("is_blocked")
                .map_err(|e| db_error("Failed to get is_blocked", e))?,
            blocked_at: row
                .try_get::<Option<DateTime<Utc>>, _>("blocked_at")
                .map_err(|e| db_error("Failed to get blocked_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create_session(&self, session: Session) -> Result<Session, DomainError> {
        let query = r#"
            INSERT INTO sessions (
                id, email, refresh_token, expires_at,
                is_blocked, blocked_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(&session.email)
            .bind(&session.refresh_token)
            .bind(session.expires_at)
            .bind(session.is_blocked)
            .bind(session.blocked_at)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create session", e))?;

        Ok(session)
    }

    async fn get_session_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, email, refresh_token, expires_at,
                   is_blocked, blocked_at, created_at, updated_at
            FROM sessions
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_session).transpose()
    }

    async fn update_session(&self, session: Session) -> Result<Session, DomainError> {
        let query = r#"
            UPDATE sessions
            SET email = ?, refresh_token = ?, expires_at = ?,
                is_blocked = ?, blocked_at = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&session.email)
            .bind(&session.refresh_token)
            .bind(session.expires_at)
            .bind(session.is_blocked)
            .bind(session.blocked_at)
            .bind(Utc::now())
            .bind(session.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Session"));
        }

        Ok(session)
    }

    async fn block_session_by_id(
        &self,
        id: Uuid,
        blocked_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        // COALESCE keeps the first block time when two logouts race
        let query = r#"
            UPDATE sessions
            SET is_blocked = TRUE,
                blocked_at = COALESCE(blocked_at, ?),
                updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(blocked_at)
            .bind(blocked_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to block session", e))?;

        // MySQL reports zero affected rows for a no-op update, so check existence
        let exists = sqlx::query("SELECT 1 FROM sessions WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        Ok(exists.is_some())
    }

    async fn delete_session_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }
}
