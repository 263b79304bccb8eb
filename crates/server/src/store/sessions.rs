//! Session token store.
//!
//! Tokens are opaque: 32 random bytes, URL-safe base64, mapped to the
//! identity that owns them. Tokens live for the process lifetime, matching
//! the in-memory account store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

use stylefront_core::Email;

use super::StoreError;

/// Length of the random token material in bytes.
const TOKEN_BYTES: usize = 32;

/// In-memory bearer-token store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Email>>>,
}

impl SessionStore {
    /// Create a new empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for an identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the lock is poisoned.
    pub fn issue(&self, email: &Email) -> Result<String, StoreError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);

        let mut sessions = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        sessions.insert(token.clone(), email.clone());
        Ok(token)
    }

    /// Resolve a token to its identity, if the token is known.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the lock is poisoned.
    pub fn identity(&self, token: &str) -> Result<Option<Email>, StoreError> {
        let sessions = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(sessions.get(token).cloned())
    }
}
