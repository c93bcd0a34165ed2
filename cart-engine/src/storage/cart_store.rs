//! Cart persistence glue
//!
//! Restores the cart and the fulfillment mode at session start and saves
//! them after every transition. On load the line items are normalized
//! (quantities, ids, duplicate configurations) and the derived money fields
//! are recomputed from `items` instead of trusting the stored values.

use super::{KvStore, RedbStore, StorageResult};
use crate::pricing::{rebuild_line_items, recalculate_cart};
use shared::cart::{CartSnapshot, FulfillmentMode};
use std::sync::Arc;

/// Storage key for the serialized cart
pub const CART_KEY: &str = "cart";

/// Storage key for the fulfillment mode
pub const FULFILLMENT_MODE_KEY: &str = "orderType";

/// Cart persistence over a [`KvStore`]
#[derive(Clone)]
pub struct CartStore {
    kv: Arc<dyn KvStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").field("kv", &"<dyn KvStore>").finish()
    }
}

impl CartStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Store backed by an in-memory redb database
    pub fn in_memory() -> StorageResult<Self> {
        Ok(Self::new(Arc::new(RedbStore::open_in_memory()?)))
    }

    /// Restore the cart, falling back to an empty cart on any failure
    pub fn load_cart(&self) -> CartSnapshot {
        let raw = match self.kv.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CartSnapshot::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart, starting empty");
                return CartSnapshot::new();
            }
        };

        let mut cart: CartSnapshot = match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                return CartSnapshot::new();
            }
        };

        let stored = cart.items.clone();
        cart.items = rebuild_line_items(cart.items);
        if cart.items != stored {
            tracing::warn!(
                stored = stored.len(),
                restored = cart.items.len(),
                "Stored line items normalized (quantities, ids, duplicates)"
            );
        }

        recalculate_cart(&mut cart);
        tracing::debug!(
            items = cart.items.len(),
            total = cart.total,
            delivery_fee = cart.delivery_fee,
            "Cart restored from storage"
        );
        cart
    }

    pub fn save_cart(&self, cart: &CartSnapshot) -> StorageResult<()> {
        let json = serde_json::to_string(cart)?;
        self.kv.set(CART_KEY, &json)
    }

    /// Restore the fulfillment mode, defaulting to delivery
    pub fn load_fulfillment_mode(&self) -> FulfillmentMode {
        match self.kv.get(FULFILLMENT_MODE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    value = %raw,
                    "Invalid stored fulfillment mode, using delivery"
                );
                FulfillmentMode::Delivery
            }),
            Ok(None) => FulfillmentMode::Delivery,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read fulfillment mode, using delivery");
                FulfillmentMode::Delivery
            }
        }
    }

    pub fn save_fulfillment_mode(&self, mode: FulfillmentMode) -> StorageResult<()> {
        let json = serde_json::to_string(&mode)?;
        self.kv.set(FULFILLMENT_MODE_KEY, &json)
    }
}
