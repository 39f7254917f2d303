//! In-memory product catalog.
//!
//! The catalog is read from a JSON file once at startup and never mutated
//! afterwards, so it is shared between handlers without locking.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use demo_shop_core::{PageWindow, Product, ProductId};
use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog lists product id {0} more than once")]
    DuplicateId(ProductId),
}

/// One page of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogPage<'a> {
    pub products: &'a [Product],
    pub window: PageWindow,
}

/// The immutable, ordered product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-decoded products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Load the catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, is not a valid
    /// product array, or contains duplicate ids.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_slice(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_products(products)
    }

    /// Return one 1-indexed page of products.
    ///
    /// Pages outside the catalog come back empty.
    #[must_use]
    pub fn list(&self, page: i64, per_page: i64) -> CatalogPage<'_> {
        let window = PageWindow::new(page, per_page, self.products.len());
        CatalogPage {
            products: window.slice(&self.products),
            window,
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
