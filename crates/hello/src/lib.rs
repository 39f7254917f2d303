//! Demo Shop hello server library.
//!
//! A two-endpoint greeting server that also serves the front-end build.
//! Exposed as a library so the router can be tested in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HelloConfig;

/// Build the hello application.
///
/// ```text
/// GET  /testget?name=   - Plain-text greeting
/// POST /testpost        - JSON greeting for {"name": ...}
/// GET  /public/*        - Files from the public directory
/// GET  /assets/*        - Files from public/assets
/// GET  /*               - The index document
/// ```
pub fn build_router(config: &HelloConfig) -> Router {
    Router::new()
        .route("/testget", get(routes::greet_query))
        .route("/testpost", post(routes::greet_json))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .nest_service("/assets", ServeDir::new(config.public_dir.join("assets")))
        .fallback_service(ServeFile::new(&config.index_file))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
