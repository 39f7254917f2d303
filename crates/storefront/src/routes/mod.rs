//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health              - Liveness check
//!
//! # Catalog
//! GET    /api/products        - Paginated listing (?page=&per_page=)
//! GET    /api/products/{id}   - Product detail
//!
//! # Cart (session-scoped, every response is the full cart)
//! GET    /api/cart            - Current cart
//! POST   /api/cart            - Add {id, quantity}
//! PUT    /api/cart            - Set quantity {id, quantity}, <= 0 removes
//! DELETE /api/cart/{id}       - Remove line
//!
//! # Front-end
//! GET    /*                   - Static file, falling back to the index document
//! ```

pub mod cart;
pub mod products;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get},
};

use crate::error::ErrorBody;
use crate::state::AppState;

/// Create the JSON API router (mounted under `/api`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route(
            "/cart",
            get(cart::show).post(cart::add).put(cart::update),
        )
        .route("/cart/{id}", delete(cart::remove))
        .fallback(api_not_found)
}

/// Unknown API paths get a JSON 404 instead of the SPA index document.
async fn api_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("not found")))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
