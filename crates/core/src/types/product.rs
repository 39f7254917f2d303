//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A purchasable product as listed in the catalog file.
///
/// Prices are kept as the display strings the catalog provides; the backend
/// never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Path or URL of the product image.
    pub image: String,
}
