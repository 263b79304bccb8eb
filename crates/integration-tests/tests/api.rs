//! End-to-end API tests over the in-process router.

use axum::http::{Method, StatusCode};
use serde_json::json;

use stylefront_integration_tests::{app_for, product, register, sample_catalog, send, test_app, test_state};

#[tokio::test]
async fn test_health() {
    let app = test_app(sample_catalog());
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_products_listing_in_catalog_order() {
    let app = test_app(sample_catalog());
    let (status, body) = send(&app, Method::GET, "/api/products", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("expected bare array");
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[0]["name"], "Red Cotton Shirt");
}

#[tokio::test]
async fn test_products_category_filter_is_case_insensitive() {
    let app = test_app(sample_catalog());
    let (status, body) = send(&app, Method::GET, "/api/products?category=clothing", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("expected bare array");
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "Clothing"));
}

#[tokio::test]
async fn test_products_unknown_category_yields_empty_array() {
    let app = test_app(sample_catalog());
    let (status, body) = send(&app, Method::GET, "/api/products?category=Garden", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_categories_distinct_first_seen() {
    let app = test_app(sample_catalog());
    let (status, body) = send(&app, Method::GET, "/api/categories", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Clothing", "Shoes", "Home"]));
}

#[tokio::test]
#[ignore = "Requires network access to the upstream catalog"]
async fn test_reload_products() {
    let app = test_app(Vec::new());
    let (status, body) = send(&app, Method::POST, "/api/reload-products", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(
        body["message"]
            .as_str()
            .expect("missing message")
            .starts_with("Successfully loaded")
    );
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_ranks_color_and_category_match_first() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/search",
        None,
        Some(json!({ "query": "red clothing" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    // Shirt matches color, category, and a token; jeans and sneakers tie
    // below it and keep catalog order.
    let ids: Vec<&str> = body["products"]
        .as_array()
        .expect("missing products")
        .iter()
        .map(|p| p["id"].as_str().expect("missing id"))
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    assert_eq!(body["message"], json!("Found 3 products matching your search."));
    assert_eq!(body["metadata"]["colors"], json!(["red"]));
    assert_eq!(body["metadata"]["categories"], json!(["Clothing"]));
}

#[tokio::test]
async fn test_search_no_match_is_success_with_empty_results() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/search",
        None,
        Some(json!({ "query": "quantum flux capacitor" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], json!([]));
    assert_eq!(body["message"], json!("Found 0 products matching your search."));
}

#[tokio::test]
async fn test_search_rejects_blank_query() {
    let app = test_app(sample_catalog());

    for payload in [json!({}), json!({ "query": "   " })] {
        let (status, body) =
            send(&app, Method::POST, "/api/search", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("No search query provided"));
    }
}

#[tokio::test]
async fn test_filtered_search_weights_filters() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/search/products",
        None,
        Some(json!({ "query": "red", "filters": ["canvas"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // The sneakers pick up the filter point and outrank the shirt.
    let names: Vec<&str> = body["products"]
        .as_array()
        .expect("missing products")
        .iter()
        .map(|p| p["name"].as_str().expect("missing name"))
        .collect();
    assert_eq!(names, vec!["Red Canvas Sneakers", "Red Cotton Shirt"]);
    assert_eq!(body["suggestedFilters"], json!(["canvas"]));
}

#[tokio::test]
async fn test_filtered_search_requires_query_even_with_filters() {
    let app = test_app(sample_catalog());

    for payload in [
        json!({ "filters": ["lamp"] }),
        json!({ "query": "   ", "filters": ["lamp"] }),
    ] {
        let (status, body) =
            send(&app, Method::POST, "/api/search/products", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("No search query provided"));
    }
}

#[tokio::test]
async fn test_search_vocabulary_tracks_the_scanned_catalog() {
    let state = test_state(sample_catalog());
    let app = app_for(&state);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/search",
        None,
        Some(json!({ "query": "red clothing gadgets" })),
    )
    .await;
    assert_eq!(body["metadata"]["categories"], json!(["Clothing"]));

    // After a reload the detected categories must come from the same
    // generation the products do.
    state
        .catalog()
        .replace(vec![product(
            "9",
            "Red Widget",
            "12.00",
            "A small red widget",
            "Gadgets",
        )])
        .expect("failed to swap catalog");

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/search",
        None,
        Some(json!({ "query": "red clothing gadgets" })),
    )
    .await;
    assert_eq!(body["metadata"]["categories"], json!(["Gadgets"]));
    assert_eq!(body["products"][0]["id"], json!("9"));
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_composes_color_category_reply() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chat",
        None,
        Some(json!({ "message": "show me red clothing" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().expect("missing response");
    assert!(text.starts_with("I found 3 red items in the Clothing category. "));
    assert!(text.contains("For example, 'Red Cotton Shirt' priced at $19.99. "));
    assert!(text.ends_with("Would you like to see more details about any of these items?"));

    assert_eq!(body["context"]["colors"], json!(["red"]));
    assert_eq!(body["context"]["categories"], json!(["Clothing"]));
    assert_eq!(
        body["context"]["products"][0],
        json!("Red Cotton Shirt")
    );
}

#[tokio::test]
async fn test_chat_empty_message_falls_back() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chat",
        None,
        Some(json!({ "message": "", "userPreferences": { "budget": 50 } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["response"]
            .as_str()
            .expect("missing response")
            .starts_with("I couldn't find any products")
    );
    assert_eq!(body["context"]["products"], json!([]));
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_login_round_trip() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;
    assert!(!token.is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "shopper@example.com", "password": "correct horse" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Login issues a fresh token, distinct from the registration one.
    let login_token = body["access_token"].as_str().expect("missing token");
    assert_ne!(login_token, token);
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let app = test_app(sample_catalog());
    register(&app, "shopper@example.com", "correct horse").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "email": "SHOPPER@example.com", "password": "other secret" })),
    )
    .await;

    // Emails are case-insensitive identities.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("User already exists"));
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let app = test_app(sample_catalog());

    for payload in [
        json!({}),
        json!({ "email": "shopper@example.com" }),
        json!({ "password": "correct horse" }),
    ] {
        let (status, body) =
            send(&app, Method::POST, "/api/register", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Email and password are required"));
    }
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = test_app(sample_catalog());
    register(&app, "shopper@example.com", "correct horse").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "shopper@example.com", "password": "wrong horse" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid credentials"));
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let app = test_app(sample_catalog());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "whatever1" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid credentials"));
}

// ============================================================================
// Cart & Checkout
// ============================================================================

#[tokio::test]
async fn test_cart_requires_bearer_token() {
    let app = test_app(sample_catalog());

    let (status, _) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/cart", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cart_round_trip() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    // Starts empty, as a bare array.
    let (status, body) = send(&app, Method::GET, "/api/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Add with explicit quantity.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"][0]["quantity"], json!(2));

    // A second add of the same product appends a new line with the
    // default quantity of 1.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cart = body["cart"].as_array().expect("missing cart");
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[1]["quantity"], json!(1));

    // Removal drops every line for the product id.
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"], json!([]));
}

#[tokio::test]
async fn test_cart_add_unknown_product() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "99" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Product not found"));
}

#[tokio::test]
async fn test_cart_add_rejects_zero_quantity() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1", "quantity": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_remove_missing_product_is_noop() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "99" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"].as_array().expect("missing cart").len(), 1);
}

#[tokio::test]
async fn test_checkout_empties_cart() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_id": "1", "quantity": 2 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/google-pay",
        Some(&token),
        Some(json!({ "paymentData": { "token": "opaque" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Payment processed successfully"));

    let (_, body) = send(&app, Method::GET, "/api/cart", Some(&token), None).await;
    assert_eq!(body, json!([]));

    // Checking out an empty cart succeeds the same way.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/google-pay",
        Some(&token),
        Some(json!({ "paymentData": { "token": "opaque" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_checkout_requires_payment_data() {
    let app = test_app(sample_catalog());
    let token = register(&app, "shopper@example.com", "correct horse").await;

    // An empty object is as good as missing.
    for payload in [
        json!({}),
        json!({ "paymentData": null }),
        json!({ "paymentData": {} }),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/google-pay",
            Some(&token),
            Some(payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Payment data is required"));
    }
}
