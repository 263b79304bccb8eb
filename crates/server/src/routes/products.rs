//! Product listing and category endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use stylefront_core::Product;

use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Optional case-insensitive exact category filter.
    pub category: Option<String>,
}

/// GET /api/products
///
/// The full catalog in catalog order, or the subset whose category equals
/// the `category` parameter (case-insensitive). An unknown category yields
/// an empty array, not an error.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let snapshot = state.catalog().snapshot();

    let products = match query.category.as_deref() {
        Some(category) if !category.is_empty() => snapshot
            .iter()
            .filter(|product| product.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect(),
        _ => snapshot.as_ref().clone(),
    };

    Json(products)
}

/// GET /api/categories
///
/// Distinct category strings in first-seen catalog order.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().categories())
}
