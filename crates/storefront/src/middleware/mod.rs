//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only, capture errors)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (propagate or generate `x-request-id`)
//! 4. Panic recovery (`CatchPanicLayer` with a JSON 500)
//! 5. Session layer (tower-sessions, signed cookie, bounded moka store)
//! 6. CORS (API routes only)

pub mod cors;
pub mod recovery;
pub mod request_id;
pub mod session;
pub mod session_store;

pub use cors::api_cors_layer;
pub use recovery::handle_panic;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, SessionCart, create_session_layer};
pub use session_store::{DEFAULT_SESSION_CAPACITY, MokaSessionStore};
