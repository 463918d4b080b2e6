//! Unit tests for the user entity

use std::str::FromStr;

use crate::domain::entities::user::{Role, User};

#[test]
fn test_new_user_defaults() {
    let user = User::new(
        "Harry Potter".to_string(),
        "harry@hogwarts.edu".to_string(),
        "$2b$04$hash".to_string(),
    );

    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
    assert!(!user.is_admin());
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_deactivate() {
    let mut user = User::new("Ron".to_string(), "ron@hogwarts.edu".to_string(), "h".to_string());
    user.deactivate();
    assert!(!user.is_active);
}

#[test]
fn test_role_parsing() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("USER").unwrap(), Role::User);
    assert!(Role::from_str("wizard").is_err());
    assert_eq!(Role::Admin.to_string(), "admin");
}

#[test]
fn test_password_hash_not_serialized() {
    let user = User::new("Harry".to_string(), "harry@hogwarts.edu".to_string(), "secret".to_string());
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("secret"));
    assert!(!json.contains("password_hash"));
}
