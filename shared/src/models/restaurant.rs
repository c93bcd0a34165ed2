//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (static catalog data)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Cuisine label shown on restaurant cards
    pub cuisine: String,
    pub rating: f64,
    /// Estimated delivery time in minutes
    pub delivery_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
