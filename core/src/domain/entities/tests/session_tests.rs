//! Unit tests for the session entity

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::session::Session;

fn session(expires_in: Duration) -> Session {
    Session::new(
        Uuid::new_v4(),
        "harry@hogwarts.edu".to_string(),
        "refresh-token".to_string(),
        Utc::now() + expires_in,
    )
}

#[test]
fn test_new_session_is_unblocked() {
    let session = session(Duration::hours(24));

    assert!(!session.is_blocked);
    assert!(session.blocked_at.is_none());
    assert_eq!(session.created_at, session.updated_at);
    assert!(!session.is_expired_at(Utc::now()));
}

#[test]
fn test_expiry_is_derived_from_expires_at() {
    let stale = session(Duration::seconds(-1));
    assert!(stale.is_expired_at(Utc::now()));

    let fresh = session(Duration::hours(1));
    assert!(!fresh.is_expired_at(fresh.expires_at));
    assert!(fresh.is_expired_at(fresh.expires_at + Duration::seconds(1)));
}
