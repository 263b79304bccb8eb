//! Per-user cart endpoints. All of them require a bearer token.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use stylefront_core::{CartItem, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Response body for cart mutations.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Vec<CartItem>,
}

/// GET /api/cart
///
/// The caller's cart as a bare item array, in insertion order.
#[instrument(skip(state, identity), fields(user = %identity.0))]
pub async fn show(
    State(state): State<AppState>,
    identity: RequireAuth,
) -> Result<Json<Vec<CartItem>>> {
    Ok(Json(state.accounts().cart(&identity.0)?))
}

fn default_quantity() -> u32 {
    1
}

/// Request body for POST /api/cart.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// POST /api/cart
///
/// Add a catalog product to the cart. The product must exist in the
/// current catalog snapshot; repeated adds append new lines.
#[instrument(skip(state, identity), fields(user = %identity.0))]
pub async fn add(
    State(state): State<AppState>,
    identity: RequireAuth,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartResponse>> {
    let product_id = request
        .product_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Product id is required".to_owned()))?;

    if request.quantity == 0 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_owned(),
        ));
    }

    let product = state
        .catalog()
        .get(&ProductId::from(product_id.as_str()))
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

    let cart = state
        .accounts()
        .add_item(&identity.0, product, request.quantity)?;

    Ok(Json(CartResponse {
        success: true,
        cart,
    }))
}

/// Request body for DELETE /api/cart.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    #[serde(default)]
    pub product_id: Option<String>,
}

/// DELETE /api/cart
///
/// Remove every cart line for a product id. Removing an id that is not in
/// the cart succeeds and returns the unchanged cart.
#[instrument(skip(state, identity), fields(user = %identity.0))]
pub async fn remove(
    State(state): State<AppState>,
    identity: RequireAuth,
    Json(request): Json<RemoveItemRequest>,
) -> Result<Json<CartResponse>> {
    let product_id = request
        .product_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Product id is required".to_owned()))?;

    let cart = state
        .accounts()
        .remove_item(&identity.0, &ProductId::from(product_id.as_str()))?;

    Ok(Json(CartResponse {
        success: true,
        cart,
    }))
}
