//! Catalog reload endpoint.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// POST /api/reload-products
///
/// Re-fetch the catalog from the upstream source and swap it in
/// atomically. An upstream failure degrades to an empty catalog rather
/// than an error, matching startup behavior.
#[instrument(skip(state))]
pub async fn reload(State(state): State<AppState>) -> Result<Json<Value>> {
    let products = state.upstream().load_or_empty().await;
    let count = state.catalog().replace(products)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Successfully loaded {count} products")
    })))
}
