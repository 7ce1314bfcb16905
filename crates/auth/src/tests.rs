//! End-to-end tests for the session core
//!
//! Drives the full stack - validation, manager, repository, store - the way
//! a login screen would.

use storage::{FileStore, MemoryStore};

use crate::application::config::AuthConfig;
use crate::application::manager::{RegisterInput, SessionManager};
use crate::domain::identity::Credentials;
use crate::domain::validation::{Field, validate_login_form};
use crate::error::AuthError;
use crate::infra::kv::KvSessionRepository;
use crate::infra::mock::MockIdentityProvider;

fn memory_manager() -> SessionManager<MockIdentityProvider, KvSessionRepository<MemoryStore>> {
    SessionManager::new(
        MockIdentityProvider::new(),
        KvSessionRepository::new(MemoryStore::new()),
        AuthConfig::default(),
    )
}

#[tokio::test]
async fn test_admin_login_end_to_end() {
    let manager = memory_manager();
    manager.initialize().await.unwrap();

    // Screen-side format checks pass first.
    assert!(validate_login_form("admin@example.com", "brie1192").is_empty());

    let user = manager
        .login(Credentials::new("admin", "brie1192"))
        .await
        .unwrap();
    assert_eq!(user.id.as_str(), "1");
    assert_eq!(user.name, "Admin User");

    let state = manager.state();
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.user.unwrap().id.as_str(), "1");
}

#[tokio::test]
async fn test_wrong_password_end_to_end() {
    let manager = memory_manager();
    manager.initialize().await.unwrap();
    let before = manager.state();

    let err = manager
        .login(Credentials::new("admin", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(manager.state(), before);
}

#[tokio::test]
async fn test_full_lifecycle_login_logout() {
    let manager = memory_manager();
    manager.initialize().await.unwrap();

    manager
        .login(Credentials::new("john", "brie1192"))
        .await
        .unwrap();
    assert!(manager.state().is_authenticated);

    manager.logout().await.unwrap();
    let state = manager.state();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_form_errors_block_before_the_store_is_touched() {
    let errors = validate_login_form("", "");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, Field::Email);
    assert_eq!(errors[1].field, Field::Password);
}

#[tokio::test]
async fn test_session_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let manager = SessionManager::new(
        MockIdentityProvider::new(),
        KvSessionRepository::new(FileStore::new(&path)),
        AuthConfig::default(),
    );
    manager.initialize().await.unwrap();
    manager
        .register(RegisterInput {
            email: "fresh@example.com".to_string(),
            password: "secret1".to_string(),
            name: "Fresh User".to_string(),
        })
        .await
        .unwrap();
    drop(manager);

    // "Relaunch": a new manager over the same file restores the session.
    let relaunched = SessionManager::new(
        MockIdentityProvider::new(),
        KvSessionRepository::new(FileStore::new(&path)),
        AuthConfig::default(),
    );
    relaunched.initialize().await.unwrap();
    let state = relaunched.state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.unwrap().email.as_str(), "fresh@example.com");
}
