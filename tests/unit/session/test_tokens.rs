use async_trait::async_trait;
use facelog_client::error::AppError;
use facelog_client::presentation::user::Role;
use facelog_client::session::{MemoryTokenStore, StoredTokens, TokenSession, TokenSlot, TokenStore};
use std::sync::Arc;

fn session_with(access: Option<&str>, refresh: Option<&str>) -> (TokenSession, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_tokens(StoredTokens {
        access: access.map(String::from),
        refresh: refresh.map(String::from),
        role: None,
    }));
    (TokenSession::new(store.clone()), store)
}

#[tokio::test]
async fn test_save_tokens_writes_both() {
    let (session, _) = session_with(None, None);
    session.save_tokens(Some("A1"), Some("R1")).await.unwrap();
    assert_eq!(session.access_token().await.as_deref(), Some("A1"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("R1"));
    assert!(session.is_authenticated().await);
}

#[tokio::test]
async fn test_save_tokens_keeps_omitted_value() {
    let (session, _) = session_with(Some("A1"), Some("R1"));
    session.save_tokens(Some("A2"), None).await.unwrap();
    assert_eq!(session.access_token().await.as_deref(), Some("A2"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_save_tokens_ignores_empty_values() {
    let (session, _) = session_with(Some("A1"), Some("R1"));
    session.save_tokens(Some(""), Some("")).await.unwrap();
    assert_eq!(session.access_token().await.as_deref(), Some("A1"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_empty_stored_value_reads_as_missing() {
    let (session, _) = session_with(Some(""), None);
    assert_eq!(session.access_token().await, None);
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_clear_tokens_removes_every_slot() {
    let (session, store) = session_with(Some("A1"), Some("R1"));
    session.set_role(&Role::Instructor).await.unwrap();
    assert_eq!(session.role().await, Some(Role::Instructor));

    session.clear_tokens().await.unwrap();
    assert_eq!(store.snapshot().await, StoredTokens::default());
    assert_eq!(session.role().await, None);
}

#[tokio::test]
async fn test_clones_share_the_store() {
    let (session, _) = session_with(None, None);
    let other = session.clone();
    session.save_tokens(Some("A1"), None).await.unwrap();
    assert_eq!(other.access_token().await.as_deref(), Some("A1"));
}

struct BrokenStore;

#[async_trait]
impl TokenStore for BrokenStore {
    async fn get(&self, _slot: TokenSlot) -> Result<Option<String>, AppError> {
        Err(AppError::Io(std::io::Error::other("unavailable")))
    }

    async fn set(&self, _slot: TokenSlot, _value: &str) -> Result<(), AppError> {
        Err(AppError::Io(std::io::Error::other("unavailable")))
    }

    async fn remove(&self, _slot: TokenSlot) -> Result<(), AppError> {
        Err(AppError::Io(std::io::Error::other("unavailable")))
    }
}

#[tokio::test]
async fn test_unreadable_store_reads_as_missing() {
    let session = TokenSession::new(Arc::new(BrokenStore));
    assert_eq!(session.access_token().await, None);
    assert_eq!(session.refresh_token().await, None);
    assert!(session.save_tokens(Some("A1"), None).await.is_err());
    assert!(session.clear_tokens().await.is_err());
}

#[test]
fn test_slot_keys() {
    assert_eq!(TokenSlot::Access.key(), "access");
    assert_eq!(TokenSlot::Refresh.key(), "refresh");
    assert_eq!(TokenSlot::Role.key(), "role");
}

#[test]
fn test_session_usable_from_blocking_code() {
    let session = TokenSession::in_memory();
    tokio_test::block_on(async {
        session.save_tokens(Some("A1"), Some("R1")).await.unwrap();
        assert!(session.is_authenticated().await);
    });
}
