/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Session accessors over a [`TokenStore`].

use crate::error::AppError;
use crate::presentation::user::Role;
use crate::session::store::{MemoryTokenStore, TokenSlot, TokenStore};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Handle to the credentials of the current user
///
/// Cloning is cheap; clones share the same underlying store. The request helper
/// receives one of these at construction instead of reaching for global state.
#[derive(Clone)]
pub struct TokenSession {
    store: Arc<dyn TokenStore>,
}

impl TokenSession {
    /// Wraps an existing store
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Creates a session backed by a fresh in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Stores whichever of the two tokens is present and non-empty
    ///
    /// A missing value leaves the corresponding slot untouched.
    ///
    /// # Errors
    /// Propagates store write failures.
    pub async fn save_tokens(
        &self,
        access: Option<&str>,
        refresh: Option<&str>,
    ) -> Result<(), AppError> {
        if let Some(access) = access.filter(|v| !v.is_empty()) {
            self.store.set(TokenSlot::Access, access).await?;
        }
        if let Some(refresh) = refresh.filter(|v| !v.is_empty()) {
            self.store.set(TokenSlot::Refresh, refresh).await?;
        }
        Ok(())
    }

    /// Current access token, `None` when unset or unreadable
    pub async fn access_token(&self) -> Option<String> {
        self.read(TokenSlot::Access).await
    }

    /// Current refresh token, `None` when unset or unreadable
    pub async fn refresh_token(&self) -> Option<String> {
        self.read(TokenSlot::Refresh).await
    }

    /// Cached role of the logged-in user
    pub async fn role(&self) -> Option<Role> {
        self.read(TokenSlot::Role).await.map(|r| Role::from(r.as_str()))
    }

    /// Caches the role of the logged-in user
    ///
    /// # Errors
    /// Propagates store write failures.
    pub async fn set_role(&self, role: &Role) -> Result<(), AppError> {
        self.store.set(TokenSlot::Role, role.as_str()).await
    }

    /// Deletes the access token, the refresh token and the role marker
    ///
    /// Every slot is attempted even if an earlier removal fails; the first failure is returned.
    ///
    /// # Errors
    /// Returns the first store failure encountered.
    pub async fn clear_tokens(&self) -> Result<(), AppError> {
        let mut first_error = None;
        for slot in TokenSlot::ALL {
            if let Err(e) = self.store.remove(slot).await {
                error!("Failed to clear {} slot: {}", slot, e);
                first_error.get_or_insert(e);
            }
        }
        debug!("Stored credentials cleared");
        first_error.map_or(Ok(()), Err)
    }

    /// True when an access token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }

    async fn read(&self, slot: TokenSlot) -> Option<String> {
        match self.store.get(slot).await {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                error!("Failed to read {} slot: {}", slot, e);
                None
            }
        }
    }
}

impl Default for TokenSession {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for TokenSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSession")
            .field("store", &"dyn TokenStore")
            .finish()
    }
}
