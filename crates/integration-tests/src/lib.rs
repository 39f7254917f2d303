//! Integration test harness for Demo Shop.
//!
//! Routers are driven in-process with `tower::ServiceExt::oneshot`; no
//! sockets are opened. [`TestClient`] plays the browser: it remembers the
//! session cookie between requests so cart state carries over.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-shop-integration-tests
//! ```

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use demo_shop_core::{Product, ProductId};
use demo_shop_storefront::{
    catalog::Catalog,
    config::StorefrontConfig,
    middleware::{DEFAULT_SESSION_CAPACITY, SESSION_COOKIE_NAME},
    state::AppState,
};
use secrecy::SecretString;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_sessions::SessionStore;
use url::Url;

/// High-entropy, 64-byte signing secret for tests.
pub const TEST_SESSION_SECRET: &str =
    "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%dF8(gH1)jV0-kM3+oN5=qR7~sU9|wX2<";

/// The front-end origin allowed by [`storefront_config`].
pub const TEST_FRONT_END_ORIGIN: &str = "http://localhost:5173";

/// Body of the index document written by [`static_fixture`].
pub const INDEX_HTML: &str = "<!doctype html><title>Demo Shop</title><div id=\"app\"></div>";

/// A captured response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Decode the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// Decode the body as UTF-8 text.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is not UTF-8")
    }

    /// A header value as text, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A cookie-remembering client for one simulated visitor.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// The session cookie (`name=value`) currently held, if any.
    #[must_use]
    pub fn session_cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Send a request built by the caller, attaching the session cookie.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().expect("valid cookie header"));
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let prefix = format!("{SESSION_COOKIE_NAME}=");
        if let Some(cookie) = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&prefix))
        {
            self.cookie = cookie.split(';').next().map(str::to_string);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).expect("valid request");
        self.send(request).await
    }

    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        let request = Request::delete(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a JSON body with the given method.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn json(&mut self, method: Method, uri: &str, body: &Value) -> TestResponse {
        self.raw(method, uri, Some("application/json"), body.to_string())
            .await
    }

    /// Send an arbitrary body, optionally with a content type.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn raw(
        &mut self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body.into()).expect("valid request");
        self.send(request).await
    }
}

/// Build a product with predictable display fields.
#[must_use]
pub fn product(id: i64, name: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        price: price.to_string(),
        image: format!("/assets/products/{id}.png"),
    }
}

/// A small catalog of `n` products with ids `1..=n`.
///
/// # Panics
///
/// Never in practice; ids are unique.
#[must_use]
pub fn sample_catalog(n: i64) -> Catalog {
    Catalog::from_products(
        (1..=n)
            .map(|id| product(id, &format!("Product {id}"), &format!("{id}.00")))
            .collect(),
    )
    .expect("unique ids")
}

/// Write a front-end build fixture: `index.html` plus `app.js`.
///
/// # Panics
///
/// Panics if the temporary directory cannot be written.
#[must_use]
pub fn static_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
    std::fs::write(dir.path().join("app.js"), "console.log('app');").expect("write app.js");
    dir
}

/// Storefront configuration pointing at `static_dir`.
///
/// # Panics
///
/// Never in practice; all literals are valid.
#[must_use]
pub fn storefront_config(static_dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 8080,
        base_url: Url::parse("http://localhost:8080").expect("valid url"),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        catalog_path: PathBuf::from("unused.json"),
        static_dir: static_dir.to_path_buf(),
        index_file: static_dir.join("index.html"),
        allowed_origins: vec![TEST_FRONT_END_ORIGIN.to_string()],
        session_capacity: DEFAULT_SESSION_CAPACITY,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A running storefront app over `catalog`.
///
/// Keep the returned `TempDir` alive for as long as the router is used.
///
/// # Panics
///
/// Panics if the router cannot be built.
#[must_use]
pub fn storefront_app(catalog: Catalog) -> (Router, TempDir) {
    let dir = static_fixture();
    let state = AppState::new(storefront_config(dir.path()), catalog);
    let app = demo_shop_storefront::build_router(state).expect("router builds");
    (app, dir)
}

/// Like [`storefront_app`], with sessions kept in `store`.
///
/// # Panics
///
/// Panics if the router cannot be built.
#[must_use]
pub fn storefront_app_with_store(catalog: Catalog, store: impl SessionStore + Clone) -> (Router, TempDir) {
    let dir = static_fixture();
    let state = AppState::new(storefront_config(dir.path()), catalog);
    let app = demo_shop_storefront::build_router_with_store(state, store).expect("router builds");
    (app, dir)
}
