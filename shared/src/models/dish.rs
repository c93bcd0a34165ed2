//! Dish Model
//!
//! Dishes are created once from the catalog and never mutated at runtime.
//! A dish optionally offers size variants (whose price replaces the base
//! price) and a set of addons grouped by [`AddonCategory`].

use serde::{Deserialize, Serialize};

/// Dish entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Base price in currency units (used when no size is selected)
    pub price: f64,
    /// Category name, matched against promo category restrictions
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Owning restaurant reference
    pub restaurant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Selectable size variants (empty = single size)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<DishSize>,
    /// Addon references offered for this dish
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addon_ids: Vec<String>,
}

impl Dish {
    /// Find a size variant offered by this dish
    pub fn size(&self, size_id: &str) -> Option<&DishSize> {
        self.sizes.iter().find(|s| s.id == size_id)
    }

    /// Whether the given addon is offered for this dish
    pub fn offers_addon(&self, addon_id: &str) -> bool {
        self.addon_ids.iter().any(|id| id == addon_id)
    }
}

/// Size variant - its price overrides the dish base price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishSize {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Addon category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddonCategory {
    Sauce,
    Side,
    Drink,
    Topping,
    Extra,
}

/// Addon definition, priced additively on top of the dish or size price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: AddonCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_deserialize_defaults() {
        let json = r#"{
            "id": "d1",
            "name": "Margherita",
            "price": 450,
            "category": "Italian",
            "restaurantId": "r1"
        }"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.price, 450.0);
        assert!(dish.sizes.is_empty());
        assert!(dish.addon_ids.is_empty());
        assert!(dish.ingredients.is_empty());
    }

    #[test]
    fn test_size_lookup() {
        let dish = Dish {
            id: "d1".into(),
            name: "Margherita".into(),
            price: 450.0,
            category: "Italian".into(),
            ingredients: vec![],
            restaurant_id: "r1".into(),
            description: None,
            image: None,
            sizes: vec![DishSize {
                id: "large".into(),
                name: "Large".into(),
                price: 650.0,
            }],
            addon_ids: vec!["a1".into()],
        };
        assert_eq!(dish.size("large").map(|s| s.price), Some(650.0));
        assert!(dish.size("small").is_none());
        assert!(dish.offers_addon("a1"));
        assert!(!dish.offers_addon("a2"));
    }

    #[test]
    fn test_addon_category_serde() {
        let json = serde_json::to_string(&AddonCategory::Sauce).unwrap();
        assert_eq!(json, "\"sauce\"");
        let cat: AddonCategory = serde_json::from_str("\"drink\"").unwrap();
        assert_eq!(cat, AddonCategory::Drink);
    }
}
