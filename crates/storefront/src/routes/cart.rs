//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every handler answers with the
//! complete cart so the front-end can resynchronize in one round trip.
//!
//! Read-modify-write is not serialized per session: two concurrent
//! mutations from the same visitor race and the last save wins.
//!
//! Mutations that leave the cart unchanged skip the save, so they never
//! create a session.

use axum::{Json, extract::State};
use demo_shop_core::{Cart, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Body of `POST /api/cart` and `PUT /api/cart`.
#[derive(Debug, Deserialize)]
pub struct CartLineRequest {
    pub id: ProductId,
    /// Omitted means 0, which add treats as 1 and update treats as removal.
    #[serde(default)]
    pub quantity: i64,
}

/// Return the current cart.
#[instrument(skip(cart))]
pub async fn show(cart: SessionCart) -> Json<Cart> {
    Json(cart.load().await)
}

/// Add a product to the cart, merging with an existing line.
#[instrument(skip(state, cart))]
pub async fn add(
    State(state): State<AppState>,
    cart: SessionCart,
    ApiJson(line): ApiJson<CartLineRequest>,
) -> Result<Json<Cart>> {
    let product = state
        .catalog()
        .get(line.id)
        .ok_or_else(AppError::product_not_found)?;

    let mut current = cart.load().await;
    current.add(product, line.quantity);
    cart.save(&current).await?;

    tracing::debug!(product_id = %line.id, lines = current.len(), "Cart item added");
    Ok(Json(current))
}

/// Set a line's quantity; zero or less removes it. Unknown ids are ignored.
#[instrument(skip(cart))]
pub async fn update(
    cart: SessionCart,
    ApiJson(line): ApiJson<CartLineRequest>,
) -> Result<Json<Cart>> {
    let mut current = cart.load().await;
    if current.set_quantity(line.id, line.quantity) {
        cart.save(&current).await?;
    }

    Ok(Json(current))
}

/// Remove a line. Removing an absent line still succeeds.
#[instrument(skip(cart))]
pub async fn remove(cart: SessionCart, ApiPath(id): ApiPath<ProductId>) -> Result<Json<Cart>> {
    let mut current = cart.load().await;
    let removed = current.remove(id);
    if removed {
        cart.save(&current).await?;
    }

    tracing::debug!(product_id = %id, removed, "Cart item removed");
    Ok(Json(current))
}
