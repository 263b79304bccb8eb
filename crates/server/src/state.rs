//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogError, CatalogStore};
use crate::config::ServerConfig;
use crate::store::{AccountStore, SessionStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the catalog snapshot, the account and
/// session stores, and the upstream catalog client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: CatalogStore,
    accounts: AccountStore,
    sessions: SessionStore,
    upstream: CatalogClient,
}

impl AppState {
    /// Create a new application state with empty stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, CatalogError> {
        let upstream = CatalogClient::new(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: CatalogStore::new(),
                accounts: AccountStore::new(),
                sessions: SessionStore::new(),
                upstream,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the account store.
    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get a reference to the upstream catalog client.
    #[must_use]
    pub fn upstream(&self) -> &CatalogClient {
        &self.inner.upstream
    }
}
