//! Demo Shop Core - Shared types library.
//!
//! This crate provides the domain types used by the `storefront` backend
//! (product catalog and session cart API).
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! sessions. Loading the catalog from disk and persisting carts live in the
//! storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Product ids, products, carts, and pagination math

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
