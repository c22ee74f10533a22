/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Token storage backends
//!
//! Credentials live in three named string slots (`access`, `refresh`, `role`).
//! The [`TokenStore`] trait abstracts where those slots are kept so the request
//! helper can be driven by an in-memory store in tests and by a file on disk in
//! long-running tools.

use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Named slot in a token store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    /// Short-lived bearer credential
    Access,
    /// Long-lived credential used to mint a new access token
    Refresh,
    /// Cached role marker of the logged-in user
    Role,
}

impl TokenSlot {
    /// All slots, in the order they are cleared
    pub const ALL: [TokenSlot; 3] = [TokenSlot::Access, TokenSlot::Refresh, TokenSlot::Role];

    /// Key under which the slot is persisted
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            TokenSlot::Access => "access",
            TokenSlot::Refresh => "refresh",
            TokenSlot::Role => "role",
        }
    }
}

impl fmt::Display for TokenSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key-value storage for credentials
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads a slot, `None` when unset
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>, AppError>;

    /// Writes a slot
    async fn set(&self, slot: TokenSlot, value: &str) -> Result<(), AppError>;

    /// Deletes a slot; deleting an unset slot is not an error
    async fn remove(&self, slot: TokenSlot) -> Result<(), AppError>;
}

/// Persisted layout shared by every backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredTokens {
    /// Access token slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Refresh token slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    /// Role slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StoredTokens {
    fn slot(&self, slot: TokenSlot) -> Option<&String> {
        match slot {
            TokenSlot::Access => self.access.as_ref(),
            TokenSlot::Refresh => self.refresh.as_ref(),
            TokenSlot::Role => self.role.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: TokenSlot) -> &mut Option<String> {
        match slot {
            TokenSlot::Access => &mut self.access,
            TokenSlot::Refresh => &mut self.refresh,
            TokenSlot::Role => &mut self.role,
        }
    }
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<StoredTokens>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given slots
    #[must_use]
    pub fn with_tokens(tokens: StoredTokens) -> Self {
        Self {
            tokens: RwLock::new(tokens),
        }
    }

    /// Returns a copy of every slot
    pub async fn snapshot(&self) -> StoredTokens {
        self.tokens.read().await.clone()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>, AppError> {
        Ok(self.tokens.read().await.slot(slot).cloned())
    }

    async fn set(&self, slot: TokenSlot, value: &str) -> Result<(), AppError> {
        *self.tokens.write().await.slot_mut(slot) = Some(value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: TokenSlot) -> Result<(), AppError> {
        *self.tokens.write().await.slot_mut(slot) = None;
        Ok(())
    }
}

/// Token store persisted as a JSON document on disk
///
/// Slots are cached in memory and the whole document is rewritten on every change.
/// The cache only takes a change once the file write has succeeded.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    tokens: RwLock<StoredTokens>,
}

impl FileTokenStore {
    /// Opens the store at `path`, loading existing slots if the file exists
    ///
    /// A file that cannot be parsed is treated as empty and overwritten on the next write.
    ///
    /// # Errors
    /// Returns `AppError::Io` when the file exists but cannot be read.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let tokens = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!("Ignoring unreadable token file {}: {}", path.display(), e);
                StoredTokens::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoredTokens::default(),
            Err(e) => return Err(e.into()),
        };

        debug!("Opened token file {}", path.display());
        Ok(Self {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, tokens: &StoredTokens) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(tokens)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>, AppError> {
        Ok(self.tokens.read().await.slot(slot).cloned())
    }

    async fn set(&self, slot: TokenSlot, value: &str) -> Result<(), AppError> {
        let mut tokens = self.tokens.write().await;
        let mut updated = tokens.clone();
        *updated.slot_mut(slot) = Some(value.to_string());
        self.persist(&updated).await?;
        *tokens = updated;
        Ok(())
    }

    async fn remove(&self, slot: TokenSlot) -> Result<(), AppError> {
        let mut tokens = self.tokens.write().await;
        if tokens.slot(slot).is_none() {
            return Ok(());
        }
        let mut updated = tokens.clone();
        *updated.slot_mut(slot) = None;
        self.persist(&updated).await?;
        *tokens = updated;
        Ok(())
    }
}
