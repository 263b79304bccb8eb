//! Keyword and filtered product search endpoints.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use stylefront_core::Product;

use crate::error::{AppError, Result};
use crate::search::{QueryTerms, ScoreVariant, distinct_categories};
use crate::state::AppState;

/// Request body for POST /api/search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Response body for POST /api/search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub message: String,
    pub metadata: SearchMetadata,
}

/// The color and category terms detected in the query.
#[derive(Debug, Serialize)]
pub struct SearchMetadata {
    pub colors: Vec<String>,
    pub categories: Vec<String>,
}

/// POST /api/search
///
/// Keyword search over the catalog with the standard scoring variant.
/// A missing or blank query is rejected with 400.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("No search query provided".to_owned()));
    }

    // Vocabulary and scan must come from the same snapshot; a reload
    // between them would score one generation against another's categories.
    let snapshot = state.catalog().snapshot();
    let terms = QueryTerms::parse(query, &distinct_categories(&snapshot));
    let outcome = crate::search::search(&snapshot, &terms, &[], ScoreVariant::Standard);

    Ok(Json(SearchResponse {
        success: true,
        products: outcome.products,
        message: outcome.message,
        metadata: SearchMetadata {
            colors: outcome.colors,
            categories: outcome.categories,
        },
    }))
}

/// Request body for POST /api/search/products.
#[derive(Debug, Deserialize)]
pub struct SearchProductsRequest {
    #[serde(default)]
    pub query: String,
    /// Extra filter strings, each worth one point per haystack match.
    #[serde(default)]
    pub filters: Vec<String>,
}

/// Response body for POST /api/search/products.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
    /// The filter strings the caller sent, echoed back for the UI.
    pub suggested_filters: Vec<String>,
}

/// POST /api/search/products
///
/// Filtered product search with the weighted scoring variant: the haystack
/// includes the derived features, tokens are worth two points each, and
/// filters one point each. A blank query is rejected with 400 even when
/// filters are supplied.
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Json(request): Json<SearchProductsRequest>,
) -> Result<Json<SearchProductsResponse>> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("No search query provided".to_owned()));
    }

    let snapshot = state.catalog().snapshot();
    let terms = QueryTerms::parse(query, &distinct_categories(&snapshot));
    let outcome =
        crate::search::search(&snapshot, &terms, &request.filters, ScoreVariant::Weighted);

    Ok(Json(SearchProductsResponse {
        success: true,
        products: outcome.products,
        suggested_filters: request.filters,
    }))
}
