//! Router assembly.
//!
//! Kept separate from `main` so integration tests can drive the exact
//! production stack in-process.

use axum::{Router, extract::Request, middleware::from_fn, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;
use tower_sessions::cookie::KeyError;

use crate::middleware::{self, MokaSessionStore};
use crate::routes;
use crate::state::AppState;

/// Build the full storefront application with the bounded in-memory
/// session store.
///
/// Sentry layers are added by the binary on top of this.
///
/// # Errors
///
/// Returns `KeyError` if the configured session secret cannot key the
/// signed session cookie.
pub fn build_router(state: AppState) -> Result<Router, KeyError> {
    let store = MokaSessionStore::new(state.config().session_capacity);
    build_router_with_store(state, store)
}

/// Build the full storefront application over an arbitrary session store.
///
/// # Errors
///
/// Returns `KeyError` if the configured session secret cannot key the
/// signed session cookie.
pub fn build_router_with_store(
    state: AppState,
    store: impl SessionStore + Clone,
) -> Result<Router, KeyError> {
    let config = state.config();
    let session_layer = middleware::create_session_layer(config, store)?;
    let cors = middleware::api_cors_layer(&config.allowed_origins);

    // Unmatched paths get the SPA index document with a 200 so client-side
    // routing can take over
    let front_end =
        ServeDir::new(&config.static_dir).fallback(ServeFile::new(&config.index_file));

    let app = Router::new()
        .route("/health", get(routes::health))
        .nest("/api", routes::api_routes().layer(cors))
        .fallback_service(front_end)
        .layer(session_layer)
        .with_state(state)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }));

    Ok(app)
}
