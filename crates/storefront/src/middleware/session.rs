//! Session middleware configuration and the typed cart accessor.
//!
//! The browser holds a signed session-id cookie; the record itself lives in
//! whichever `SessionStore` the layer is built with (a bounded
//! [`MokaSessionStore`](super::MokaSessionStore) in production). Handlers
//! never touch raw session values: the cart goes in and out through
//! [`SessionCart`].

use axum::{extract::FromRequestParts, http::request::Parts};
use demo_shop_core::Cart;
use secrecy::ExposeSecret;
use tower_sessions::cookie::{Key, KeyError, SameSite};
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::models::session_keys;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "demo_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over `store`.
///
/// # Errors
///
/// Returns `KeyError` if the session secret is too short to derive a
/// signing key (fewer than 64 bytes).
pub fn create_session_layer<S: SessionStore>(
    config: &StorefrontConfig,
    store: S,
) -> Result<SessionManagerLayer<S, SignedCookie>, KeyError> {
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())?;

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}

/// Extractor giving typed access to the visitor's cart.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(cart: SessionCart) -> Json<Cart> {
///     Json(cart.load().await)
/// }
/// ```
pub struct SessionCart(Session);

impl SessionCart {
    /// Read the cart from the session.
    ///
    /// A missing or unreadable value yields an empty cart; stale or
    /// hand-edited session data is never an error for the visitor.
    pub async fn load(&self) -> Cart {
        match self.0.get::<Cart>(session_keys::CART).await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::debug!(error = %e, "Discarding unreadable session cart");
                Cart::new()
            }
        }
    }

    /// Persist the cart and write the session through to the store.
    ///
    /// The write happens here rather than after the response so a store
    /// failure surfaces as this request's error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store rejects the write.
    pub async fn save(&self, cart: &Cart) -> Result<(), AppError> {
        self.0.insert(session_keys::CART, cart).await?;
        self.0.save().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer; missing only if the router is mis-assembled
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(Self)
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))
    }
}
