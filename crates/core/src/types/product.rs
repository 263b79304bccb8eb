//! Catalog and cart data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A normalized catalog product.
///
/// Immutable after load; identity is [`ProductId`]. `features` is derived at
/// load time: the category followed by the first five lowercase words of the
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in the catalog currency, non-negative.
    pub price: Decimal,
    /// Image URL as supplied by the upstream catalog.
    pub image: String,
    pub description: String,
    pub category: String,
    pub features: Vec<String>,
}

impl Product {
    /// The lowercase haystack used for substring relevance matching:
    /// name, description, and category, optionally followed by the
    /// derived features.
    #[must_use]
    pub fn search_text(&self, include_features: bool) -> String {
        let mut text = format!("{} {} {}", self.name, self.description, self.category);
        if include_features {
            for feature in &self.features {
                text.push(' ');
                text.push_str(feature);
            }
        }
        text.to_lowercase()
    }
}

/// A line in a user's cart.
///
/// Carts append a new item per add; the same product may appear on several
/// lines. Quantity is at least 1, enforced at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}
