//! Account store: identity records and their carts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use stylefront_core::{CartItem, Email, Product, ProductId};

use super::StoreError;

/// One identity record: an opaque hashed credential and an ordered cart.
#[derive(Debug, Clone)]
struct Account {
    password_hash: String,
    cart: Vec<CartItem>,
}

/// In-memory store of identity records keyed by email.
///
/// Accounts are created on registration and never deleted.
#[derive(Clone, Default)]
pub struct AccountStore {
    inner: Arc<RwLock<HashMap<Email, Account>>>,
}

impl AccountStore {
    /// Create a new empty account store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with an already-hashed credential.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email is already registered.
    pub fn create(&self, email: &Email, password_hash: String) -> Result<(), StoreError> {
        let mut accounts = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if accounts.contains_key(email) {
            return Err(StoreError::Conflict(email.to_string()));
        }
        accounts.insert(
            email.clone(),
            Account {
                password_hash,
                cart: Vec::new(),
            },
        );
        Ok(())
    }

    /// Look up the stored credential for an identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the lock is poisoned.
    pub fn password_hash(&self, email: &Email) -> Result<Option<String>, StoreError> {
        let accounts = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(email).map(|a| a.password_hash.clone()))
    }

    /// The identity's current cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccountNotFound` if the identity is unknown.
    pub fn cart(&self, email: &Email) -> Result<Vec<CartItem>, StoreError> {
        let accounts = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        accounts
            .get(email)
            .map(|a| a.cart.clone())
            .ok_or(StoreError::AccountNotFound)
    }

    /// Append an item to the identity's cart and return the updated cart.
    ///
    /// A second add of the same product appends a new line; lines are never
    /// merged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccountNotFound` if the identity is unknown.
    pub fn add_item(
        &self,
        email: &Email,
        product: Product,
        quantity: u32,
    ) -> Result<Vec<CartItem>, StoreError> {
        let mut accounts = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let account = accounts.get_mut(email).ok_or(StoreError::AccountNotFound)?;
        account.cart.push(CartItem { product, quantity });
        Ok(account.cart.clone())
    }

    /// Remove every cart line for a product id; a no-op if none match.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccountNotFound` if the identity is unknown.
    pub fn remove_item(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<Vec<CartItem>, StoreError> {
        let mut accounts = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let account = accounts.get_mut(email).ok_or(StoreError::AccountNotFound)?;
        account.cart.retain(|item| &item.product.id != product_id);
        Ok(account.cart.clone())
    }

    /// Empty the identity's cart (checkout).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccountNotFound` if the identity is unknown.
    pub fn clear_cart(&self, email: &Email) -> Result<(), StoreError> {
        let mut accounts = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let account = accounts.get_mut(email).ok_or(StoreError::AccountNotFound)?;
        account.cart.clear();
        Ok(())
    }
}
