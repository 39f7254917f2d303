//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use demo_shop_core::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::extract::ApiPath;
use crate::state::AppState;

/// Pagination query parameters.
///
/// Kept as raw strings: unparseable values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PaginationQuery {
    fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    fn per_page(&self) -> i64 {
        parse_or(self.per_page.as_deref(), DEFAULT_PER_PAGE)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Paginated product listing response.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: i64,
    pub per_page: i64,
    pub total: usize,
    pub total_pages: usize,
}

/// List products, one page at a time.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<PaginationQuery>, QueryRejection>,
) -> Json<ProductPage> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let page = state.catalog().list(query.page(), query.per_page());

    Json(ProductPage {
        products: page.products.to_vec(),
        page: page.window.page,
        per_page: page.window.per_page,
        total: page.window.total,
        total_pages: page.window.total_pages,
    })
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(AppError::product_not_found)
}
