//! Unit tests for mock user repository

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(email: &str) -> User {
    User::new("Test".to_string(), email.to_string(), "hash".to_string())
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();
    let user = user("harry@hogwarts.edu");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("harry@hogwarts.edu".to_string()));

    let by_email = repo.find_by_email("harry@hogwarts.edu").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_mock_repository_missing_user() {
    let repo = MockUserRepository::new();

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo.find_by_email("nobody@hogwarts.edu").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_rejects_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.create(user("harry@hogwarts.edu")).await.unwrap();

    let result = repo.create(user("harry@hogwarts.edu")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(repo.len().await, 1);
}
