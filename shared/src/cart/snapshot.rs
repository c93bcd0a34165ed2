//! Cart snapshot - the aggregate root as rendered and persisted
//!
//! The serialized form is the persisted `cart` value:
//! `{ items, total, deliveryFee, discount, promoCode? }`.
//! `total` always equals `Σ items.totalPrice + deliveryFee - discount`;
//! the cart engine recomputes it after every mutation.

use super::types::{FulfillmentMode, LineItem};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Cart aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items in insertion order
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl CartSnapshot {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ line item totals
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| Decimal::from_f64(item.total_price).unwrap_or_default())
            .sum::<Decimal>()
            .to_f64()
            .unwrap_or_default()
    }

    /// Total quantity across all line items
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Total quantity of a dish across all of its configurations
    pub fn item_quantity(&self, dish_id: &str) -> i32 {
        self.items
            .iter()
            .filter(|item| item.dish_id() == dish_id)
            .map(|item| item.quantity)
            .sum()
    }

    pub fn find_item(&self, line_item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == line_item_id)
    }

    /// Amount the customer pays in the given fulfillment mode
    ///
    /// Pickup orders are not charged the delivery fee.
    pub fn payable_total(&self, mode: FulfillmentMode) -> f64 {
        if mode.charges_delivery_fee() {
            self.total
        } else {
            let total = Decimal::from_f64(self.total).unwrap_or_default();
            let fee = Decimal::from_f64(self.delivery_fee).unwrap_or_default();
            (total - fee).to_f64().unwrap_or_default()
        }
    }
}
