//! CORS policy for the JSON API.
//!
//! The front-end is served from a different origin during development, and
//! the cart relies on the session cookie, so only an explicit origin list is
//! allowed and credentials are enabled.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Preflight responses may be cached for one hour.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the API CORS layer for the configured front-end origins.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn api_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
