//! Integration tests for the session cart endpoints.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use demo_shop_integration_tests::{
    TEST_FRONT_END_ORIGIN, TestClient, sample_catalog, storefront_app,
};
use serde_json::{Value, json};

fn lines(cart: &Value) -> Vec<(i64, i64)> {
    cart.as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["id"].as_i64().unwrap(),
                item["quantity"].as_i64().unwrap(),
            )
        })
        .collect()
}

fn client() -> (TestClient, tempfile::TempDir) {
    let (app, dir) = storefront_app(sample_catalog(2));
    (TestClient::new(app), dir)
}

// =============================================================================
// Reading
// =============================================================================

#[tokio::test]
async fn test_new_visitor_has_empty_cart() {
    let (mut client, _dir) = client();

    let response = client.get("/api/cart").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_add_then_get_round_trip() {
    let (mut client, _dir) = client();

    let added = client
        .json(Method::POST, "/api/cart", &json!({ "id": 2, "quantity": 4 }))
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert!(client.session_cookie().is_some());

    let cart = client.get("/api/cart").await.json();
    assert_eq!(
        cart,
        json!([{
            "id": 2,
            "name": "Product 2",
            "price": "2.00",
            "image": "/assets/products/2.png",
            "quantity": 4
        }])
    );
}

// =============================================================================
// Full scenario
// =============================================================================

#[tokio::test]
async fn test_add_merge_update_delete_scenario() {
    let (mut client, _dir) = client();

    let cart = client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 2 }))
        .await
        .json();
    assert_eq!(lines(&cart), vec![(1, 2)]);

    let cart = client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 3 }))
        .await
        .json();
    assert_eq!(lines(&cart), vec![(1, 5)]);

    let cart = client
        .json(Method::PUT, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
        .await
        .json();
    assert_eq!(lines(&cart), vec![(1, 1)]);

    let response = client.delete("/api/cart/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

// =============================================================================
// Add
// =============================================================================

#[tokio::test]
async fn test_add_keeps_insertion_order_across_products() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 2, "quantity": 1 }))
        .await;
    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
        .await;
    let cart = client
        .json(Method::POST, "/api/cart", &json!({ "id": 2, "quantity": 1 }))
        .await
        .json();

    assert_eq!(lines(&cart), vec![(2, 2), (1, 1)]);
}

#[tokio::test]
async fn test_add_non_positive_or_missing_quantity_adds_one() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 0 }))
        .await;
    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": -3 }))
        .await;
    let cart = client
        .json(Method::POST, "/api/cart", &json!({ "id": 1 }))
        .await
        .json();

    assert_eq!(lines(&cart), vec![(1, 3)]);
}

#[tokio::test]
async fn test_add_unknown_product_is_404_and_leaves_cart_alone() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
        .await;

    let response = client
        .json(Method::POST, "/api/cart", &json!({ "id": 99, "quantity": 1 }))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "error": "product not found" }));

    assert_eq!(lines(&client.get("/api/cart").await.json()), vec![(1, 1)]);
}

#[tokio::test]
async fn test_malformed_bodies_are_400() {
    let (mut client, _dir) = client();

    let cases: [(Option<&str>, &str); 5] = [
        (Some("application/json"), "{not json"),
        (Some("application/json"), r#"{"quantity": 2}"#),
        (Some("application/json"), r#"{"id": "one", "quantity": 2}"#),
        (Some("application/json"), r#"{"id": 1, "quantity": 1.5}"#),
        (None, r#"{"id": 1, "quantity": 2}"#),
    ];

    for (content_type, body) in cases {
        let response = client
            .raw(Method::POST, "/api/cart", content_type, body.to_string())
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response.json()["error"].is_string());

        let response = client
            .raw(Method::PUT, "/api/cart", content_type, body.to_string())
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
    }

    assert_eq!(client.get("/api/cart").await.json(), json!([]));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_zero_or_negative_removes_line() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 2 }))
        .await;
    client
        .json(Method::POST, "/api/cart", &json!({ "id": 2, "quantity": 2 }))
        .await;

    let cart = client
        .json(Method::PUT, "/api/cart", &json!({ "id": 1, "quantity": 0 }))
        .await
        .json();
    assert_eq!(lines(&cart), vec![(2, 2)]);

    let cart = client
        .json(Method::PUT, "/api/cart", &json!({ "id": 2, "quantity": -1 }))
        .await
        .json();
    assert_eq!(cart, json!([]));
}

#[tokio::test]
async fn test_update_absent_line_is_noop() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 2 }))
        .await;

    let response = client
        .json(Method::PUT, "/api/cart", &json!({ "id": 2, "quantity": 5 }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(lines(&response.json()), vec![(1, 2)]);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_absent_line_is_200_and_unchanged() {
    let (mut client, _dir) = client();

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 2 }))
        .await;

    for _ in 0..2 {
        let response = client.delete("/api/cart/2").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(lines(&response.json()), vec![(1, 2)]);
    }

    let response = client.delete("/api/cart/1").await;
    assert_eq!(response.json(), json!([]));
    let response = client.delete("/api/cart/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

// =============================================================================
// Sessions and CORS
// =============================================================================

#[tokio::test]
async fn test_carts_are_isolated_per_session() {
    let (app, _dir) = storefront_app(sample_catalog(2));
    let mut alice = TestClient::new(app.clone());
    let mut bob = TestClient::new(app);

    alice
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 3 }))
        .await;

    assert_eq!(bob.get("/api/cart").await.json(), json!([]));
    assert_eq!(lines(&alice.get("/api/cart").await.json()), vec![(1, 3)]);
}

#[tokio::test]
async fn test_tampered_session_cookie_starts_fresh() {
    let (app, _dir) = storefront_app(sample_catalog(2));
    let mut client = TestClient::new(app.clone());

    client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 3 }))
        .await;
    let cookie = client.session_cookie().unwrap().to_string();

    let (name, value) = cookie.split_once('=').unwrap();
    let forged = format!("{name}=x{value}");

    let mut intruder = TestClient::new(app);
    let request = Request::get("/api/cart")
        .header(header::COOKIE, forged)
        .body(Body::empty())
        .unwrap();
    let response = intruder.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_cors_preflight_allows_front_end_with_credentials() {
    let (mut client, _dir) = client();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/cart")
        .header(header::ORIGIN, TEST_FRONT_END_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = client.send(request).await;

    assert!(response.status.is_success());
    assert_eq!(
        response.header("access-control-allow-origin"),
        Some(TEST_FRONT_END_ORIGIN)
    );
    assert_eq!(
        response.header("access-control-allow-credentials"),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let (mut client, _dir) = client();

    let request = Request::get("/api/cart")
        .header(header::ORIGIN, "https://evil.example.net")
        .body(Body::empty())
        .unwrap();
    let response = client.send(request).await;

    assert!(response.header("access-control-allow-origin").is_none());
}
