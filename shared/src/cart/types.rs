//! Cart line item and fulfillment types

use crate::models::{Addon, Dish, DishSize};
use serde::{Deserialize, Serialize};

// ============================================================================
// Line Item
// ============================================================================

/// Maximum quantity of a single line item
pub const MAX_QUANTITY: i32 = 99;

/// One configuration of a dish in the cart (dish + size + addon set)
///
/// `id` is built from the dish id, the size id (or `default`) and the
/// sorted addon ids. Merging compares the configuration itself
/// ([`LineItem::matches_configuration`]), not the id string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identity key
    pub id: String,
    /// Dish snapshot at the time it was added
    pub dish: Dish,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<DishSize>,
    /// Selected addons, deduplicated and sorted by id
    #[serde(default)]
    pub selected_addons: Vec<Addon>,
    /// (size price or dish price + addon prices) * quantity
    pub total_price: f64,
}

impl LineItem {
    pub fn dish_id(&self) -> &str {
        &self.dish.id
    }

    pub fn restaurant_id(&self) -> &str {
        &self.dish.restaurant_id
    }

    /// Same dish, same size and the same addon set (order and duplicates ignored)
    pub fn matches_configuration(
        &self,
        dish: &Dish,
        size: Option<&DishSize>,
        addons: &[Addon],
    ) -> bool {
        self.dish.id == dish.id
            && self.selected_size.as_ref().map(|s| s.id.as_str()) == size.map(|s| s.id.as_str())
            && addon_id_set(&self.selected_addons) == addon_id_set(addons)
    }
}

fn addon_id_set(addons: &[Addon]) -> Vec<&str> {
    let mut ids: Vec<&str> = addons.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

// ============================================================================
// Fulfillment Mode
// ============================================================================

/// 配送方式 - delivery charges the delivery fee, pickup does not
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMode {
    #[default]
    Delivery,
    Pickup,
}

impl FulfillmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }

    /// Whether the delivery fee line is charged in this mode
    pub fn charges_delivery_fee(&self) -> bool {
        matches!(self, Self::Delivery)
    }
}

impl std::fmt::Display for FulfillmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Promo Response
// ============================================================================

/// Result of applying a promo code, in the shape the storefront UI consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoApplyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PromoApplyResponse {
    pub fn approved(discount: f64) -> Self {
        Self {
            success: true,
            discount: Some(discount),
            error: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            discount: None,
            error: Some(reason.into()),
        }
    }
}

impl<E: std::fmt::Display> From<Result<f64, E>> for PromoApplyResponse {
    fn from(result: Result<f64, E>) -> Self {
        match result {
            Ok(discount) => Self::approved(discount),
            Err(e) => Self::rejected(e.to_string()),
        }
    }
}
