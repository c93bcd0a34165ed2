//! Cart types
//!
//! - [`LineItem`]: one dish configuration with quantity and derived total
//! - [`CartSnapshot`]: the aggregate root (items + derived money fields)
//! - [`FulfillmentMode`]: delivery vs. pickup, persisted independently

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::CartSnapshot;
pub use types::*;
