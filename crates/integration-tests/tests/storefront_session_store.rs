//! Integration tests for session storage: what gets stored, and how store
//! failures reach the client.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use demo_shop_integration_tests::{TestClient, sample_catalog, storefront_app_with_store};
use demo_shop_storefront::middleware::{MokaSessionStore, REQUEST_ID_HEADER};
use serde_json::json;
use tower_sessions::SessionStore;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store;

/// Store whose writes always fail.
#[derive(Debug, Clone)]
struct FailingStore;

#[async_trait]
impl SessionStore for FailingStore {
    async fn create(&self, _record: &mut Record) -> session_store::Result<()> {
        Err(session_store::Error::Backend("store offline".to_string()))
    }

    async fn save(&self, _record: &Record) -> session_store::Result<()> {
        Err(session_store::Error::Backend("store offline".to_string()))
    }

    async fn load(&self, _session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(None)
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Ok(())
    }
}

/// Store that panics when asked to persist anything.
#[derive(Debug, Clone)]
struct PanickingStore;

#[async_trait]
impl SessionStore for PanickingStore {
    async fn create(&self, _record: &mut Record) -> session_store::Result<()> {
        panic!("session store exploded");
    }

    async fn save(&self, _record: &Record) -> session_store::Result<()> {
        panic!("session store exploded");
    }

    async fn load(&self, _session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(None)
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Session creation
// =============================================================================

#[tokio::test]
async fn test_noop_mutations_do_not_create_sessions() {
    let store = MokaSessionStore::default();
    let (app, _dir) = storefront_app_with_store(sample_catalog(2), store.clone());

    for _ in 0..50 {
        let mut client = TestClient::new(app.clone());

        let response = client.delete("/api/cart/42").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), json!([]));
        assert!(response.header("set-cookie").is_none());

        let response = client
            .json(Method::PUT, "/api/cart", &json!({ "id": 1, "quantity": 3 }))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.header("set-cookie").is_none());

        client.get("/api/cart").await;
        assert!(client.session_cookie().is_none());
    }

    assert_eq!(store.session_count().await, 0);
}

#[tokio::test]
async fn test_one_session_per_visitor_that_adds() {
    let store = MokaSessionStore::default();
    let (app, _dir) = storefront_app_with_store(sample_catalog(2), store.clone());

    let mut client = TestClient::new(app);
    for _ in 0..3 {
        client
            .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
            .await;
    }
    client.delete("/api/cart/1").await;

    assert!(client.session_cookie().is_some());
    assert_eq!(store.session_count().await, 1);
}

// =============================================================================
// Store failures
// =============================================================================

#[tokio::test]
async fn test_store_write_failure_is_generic_500() {
    let (app, _dir) = storefront_app_with_store(sample_catalog(2), FailingStore);
    let mut client = TestClient::new(app);

    let response = client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "error": "internal server error" }));
    assert!(client.session_cookie().is_none());
}

#[tokio::test]
async fn test_reads_do_not_touch_failing_store_writes() {
    let (app, _dir) = storefront_app_with_store(sample_catalog(2), FailingStore);
    let mut client = TestClient::new(app);

    let response = client.get("/api/cart").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));

    let response = client.delete("/api/cart/1").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_panic_inside_handler_is_recovered_by_app_stack() {
    let (app, _dir) = storefront_app_with_store(sample_catalog(2), PanickingStore);
    let mut client = TestClient::new(app);

    let response = client
        .json(Method::POST, "/api/cart", &json!({ "id": 1, "quantity": 1 }))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "error": "internal server error" }));
    assert!(response.header(REQUEST_ID_HEADER).is_some());

    // The process keeps serving
    let response = client.get("/api/products").await;
    assert_eq!(response.status, StatusCode::OK);
}
