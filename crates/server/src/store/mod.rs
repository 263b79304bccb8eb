//! In-memory stores for accounts, carts, and session tokens.
//!
//! Persistence beyond process memory is out of scope; everything here lives
//! in `RwLock`-guarded maps shared across requests. Concurrent mutations of
//! one identity's cart may interleave arbitrarily (accepted lost-update
//! race, not a guarantee).

pub mod accounts;
pub mod sessions;

use thiserror::Error;

pub use accounts::AccountStore;
pub use sessions::SessionStore;

/// Errors from the in-memory stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// The key already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No account exists for the given identity.
    #[error("account not found")]
    AccountNotFound,
}
