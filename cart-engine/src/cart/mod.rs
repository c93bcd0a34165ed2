//! Order Cart Module
//!
//! - **manager**: [`CartManager`], the cart state machine
//! - **checkout**: simulated checkout producing an [`OrderReceipt`]
//!
//! # Data Flow
//!
//! ```text
//! UI event → CartManager operation
//!               ├─ validate (auth, quantity, configuration)
//!               ├─ mutate a copy of the cart
//!               ├─ recalculate line totals, delivery fee, total
//!               ├─ adopt the new state
//!               └─ persist (failures are logged only)
//! ```

pub mod checkout;
pub mod manager;

pub use checkout::OrderReceipt;
pub use manager::{CartError, CartManager, CartResult, CartState, MAX_QUANTITY};
