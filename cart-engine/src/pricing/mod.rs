//! Pricing Module
//!
//! Pure functions recomputed by the cart on every mutation:
//! line item totals, the delivery fee, promo discounts and cart totals.

mod delivery;
mod item_calculator;
pub mod money;
mod order_calculator;
pub mod promo;

pub use delivery::*;
pub use item_calculator::*;
pub use order_calculator::*;
pub use promo::{PromoRejection, find_active_promo, validate_promo};
