//! The in-process product catalog.
//!
//! The catalog is a single wholesale-replaceable snapshot: requests clone an
//! `Arc` to the current product list and scan it linearly, while a reload
//! swaps the reference atomically. A reader that started before a reload
//! keeps its old snapshot; it never observes a torn mixture.

mod client;

use std::sync::{Arc, RwLock};

use stylefront_core::{Product, ProductId};

use crate::store::StoreError;

pub use client::{CatalogClient, CatalogError, RawProduct};

/// Process-wide catalog store.
///
/// Starts empty and is replaced wholesale on load/reload. There is no
/// index; every search is a full scan of the snapshot. Duplicate product
/// ids are not rejected and will produce duplicate results.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Arc<Vec<Product>>>>,
}

impl CatalogStore {
    /// Create a new empty catalog store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current catalog snapshot.
    ///
    /// Cheap: clones the inner `Arc`, not the products. Returns an empty
    /// snapshot if the lock is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Product>> {
        self.inner
            .read()
            .map(|guard| Arc::clone(&guard))
            .unwrap_or_default()
    }

    /// Replace the whole catalog, returning the new product count.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the catalog lock is poisoned.
    pub fn replace(&self, products: Vec<Product>) -> Result<usize, StoreError> {
        let count = products.len();
        *self.inner.write().map_err(|_| StoreError::LockPoisoned)? = Arc::new(products);
        Ok(count)
    }

    /// Look up a product by id in the current snapshot.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.snapshot().iter().find(|p| &p.id == id).cloned()
    }

    /// The distinct categories of the current snapshot, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        crate::search::distinct_categories(&self.snapshot())
    }

    /// Number of products in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}
