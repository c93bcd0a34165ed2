//! Promo Code Model

use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat amount off the order
    Fixed,
    /// Percentage of the (eligible) subtotal
    Percentage,
}

/// Promo code definition (read-only at runtime)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub code: String,
    pub discount_type: DiscountType,
    /// Discount magnitude (percentage: 15=15%, fixed: 20=20 currency units)
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    /// Eligible dish categories (None = every category)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_categories: Option<Vec<String>>,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
}

impl PromoCode {
    /// Case-insensitive code comparison
    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Category restriction, treating an empty list as no restriction
    pub fn category_restriction(&self) -> Option<&[String]> {
        self.applicable_categories
            .as_deref()
            .filter(|categories| !categories.is_empty())
    }
}
