//! Integration test support for Stylefront.
//!
//! The API tests drive the real router in-process with
//! [`tower::ServiceExt::oneshot`], so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stylefront-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use stylefront_core::{Product, ProductId};
use stylefront_server::config::ServerConfig;
use stylefront_server::routes;
use stylefront_server::state::AppState;

/// Build application state over a seeded in-memory catalog.
#[must_use]
pub fn test_state(products: Vec<Product>) -> AppState {
    let state = AppState::new(ServerConfig::default()).expect("failed to build state");
    state
        .catalog()
        .replace(products)
        .expect("failed to seed catalog");
    state
}

/// Build an application router over a seeded in-memory catalog.
#[must_use]
pub fn test_app(products: Vec<Product>) -> Router {
    routes::app(test_state(products))
}

/// Build a router sharing an existing state, for tests that also mutate it.
#[must_use]
pub fn app_for(state: &AppState) -> Router {
    routes::app(state.clone())
}

/// A small catalog covering colors, categories, and ties.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("1", "Red Cotton Shirt", "19.99", "A bright red shirt", "Clothing"),
        product("2", "Blue Denim Jeans", "49.50", "Classic blue jeans", "Clothing"),
        product("3", "Red Canvas Sneakers", "35.00", "Lightweight red sneakers", "Shoes"),
        product("4", "Desk Lamp", "24.00", "A plain desk lamp", "Home"),
    ]
}

/// Build one catalog product with the load-time derived features.
#[must_use]
pub fn product(id: &str, name: &str, price: &str, description: &str, category: &str) -> Product {
    let features = std::iter::once(category.to_owned())
        .chain(
            description
                .to_lowercase()
                .split_whitespace()
                .take(5)
                .map(ToOwned::to_owned),
        )
        .collect();
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        price: price.parse::<Decimal>().expect("bad test price"),
        image: String::new(),
        description: description.to_owned(),
        category: category.to_owned(),
        features,
    }
}

/// Send one request through the router and decode the response.
///
/// Non-JSON bodies come back as a JSON string value.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router rejected request");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Register a fresh account and return its access token.
pub async fn register(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "registration failed: {body}");
    body["access_token"]
        .as_str()
        .expect("missing access_token")
        .to_owned()
}
