//! Core types for Demo Shop.
//!
//! This module provides type-safe wrappers for the catalog and cart domain.

pub mod cart;
pub mod id;
pub mod page;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::*;
pub use page::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PageWindow};
pub use product::Product;
