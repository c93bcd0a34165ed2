//! Catalog data models
//!
//! Static, read-only catalog entities shared between the cart engine and
//! the storefront UI. Field names serialize as camelCase.

pub mod dish;
pub mod promo;
pub mod restaurant;

// Re-exports
pub use dish::*;
pub use promo::*;
pub use restaurant::*;
