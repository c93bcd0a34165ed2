//! Shared types for the storefront
//!
//! Catalog models, cart data types, the unified error-code system and
//! small utilities used by the cart engine and its consumers.

pub mod cart;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartSnapshot, FulfillmentMode, LineItem, PromoApplyResponse};
pub use error::{AppError, AppResult, ErrorCode};
