//! Session-related types.
//!
//! The cart itself is [`demo_shop_core::Cart`]; it is stored in the session
//! as JSON and read back through [`crate::middleware::SessionCart`].

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";
}
