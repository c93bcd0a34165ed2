//! Checkout simulation
//!
//! Turns the current cart into an in-memory receipt. No payment is taken
//! and nothing is sent anywhere; the cart is cleared afterwards.

use crate::auth::CurrentUser;
use serde::{Deserialize, Serialize};
use shared::cart::{CartSnapshot, FulfillmentMode, LineItem};

/// Receipt of a simulated order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Snowflake order id
    pub order_id: i64,
    /// Customer username
    pub customer: String,
    pub items: Vec<LineItem>,
    pub fulfillment_mode: FulfillmentMode,
    pub subtotal: f64,
    /// 0 for pickup orders
    pub delivery_fee: f64,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    /// Amount charged
    pub total: f64,
    /// Unix millis
    pub placed_at: i64,
}

impl OrderReceipt {
    pub fn from_cart(cart: &CartSnapshot, mode: FulfillmentMode, customer: &CurrentUser) -> Self {
        Self {
            order_id: shared::util::snowflake_id(),
            customer: customer.username.clone(),
            items: cart.items.clone(),
            fulfillment_mode: mode,
            subtotal: cart.subtotal(),
            delivery_fee: if mode.charges_delivery_fee() {
                cart.delivery_fee
            } else {
                0.0
            },
            discount: cart.discount,
            promo_code: cart.promo_code.clone(),
            total: cart.payable_total(mode),
            placed_at: shared::util::now_millis(),
        }
    }
}
