//! In-memory SessionRepository for tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::trait_::SessionRepository;

/// Mock session repository for testing
///
/// Clones share the same backing map, so a test can keep a handle and
/// inspect rows written through a service.
#[derive(Clone)]
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    failing: Arc<AtomicBool>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail with an internal error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert a row directly, bypassing failure injection
    pub async fn insert(&self, session: Session) {
        self.sessions.write().await.insert(session.id, session);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::internal("session store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn create_session(&self, session: Session) -> Result<Session, DomainError> {
        self.check()?;
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.id) {
            return Err(DomainError::validation("Session already exists"));
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_session_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        self.check()?;
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn update_session(&self, session: Session) -> Result<Session, DomainError> {
        self.check()?;
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&session.id) {
            return Err(DomainError::not_found("Session"));
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn block_session_by_id(
        &self,
        id: Uuid,
        blocked_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        self.check()?;
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&id) {
            Some(session) => {
                session.is_blocked = true;
                session.blocked_at = Some(blocked_at);
                session.updated_at = blocked_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_session_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check()?;
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&id).is_some())
    }
}
