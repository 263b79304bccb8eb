//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//!
//! # Catalog
//! GET    /api/products          - Product listing (optional ?category=)
//! GET    /api/categories        - Distinct category strings
//! POST   /api/reload-products   - Re-fetch the catalog from upstream
//!
//! # Search
//! POST   /api/search            - Keyword search
//! POST   /api/search/products   - Filtered product search
//! POST   /api/chat              - Conversational recommendation
//!
//! # Auth
//! POST   /api/register          - Register, returns access token
//! POST   /api/login             - Login, returns access token
//!
//! # Cart (requires bearer token)
//! GET    /api/cart              - Read cart
//! POST   /api/cart              - Add item
//! DELETE /api/cart              - Remove item
//! POST   /api/google-pay        - Simulated checkout, empties cart
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod payments;
pub mod products;
pub mod search;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the API routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/categories", get(products::categories))
        .route("/reload-products", post(catalog::reload))
        .route("/search", post(search::search))
        .route("/search/products", post(search::search_products))
        .route("/chat", post(chat::chat))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/cart",
            get(cart::show).post(cart::add).delete(cart::remove),
        )
        .route("/google-pay", post(payments::google_pay))
}

/// Build the CORS layer for the configured frontend origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Assemble the full application router.
///
/// Used by both the binary and the integration tests.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes())
        .layer(cors)
        .with_state(state)
}
