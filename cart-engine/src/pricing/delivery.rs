//! Delivery Fee Policy
//!
//! One flat surcharge per distinct restaurant represented in the cart.
//! Always derived from the current items; never cached.

use super::money::{to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::cart::LineItem;
use std::collections::HashSet;

/// Surcharge per originating restaurant (currency units)
pub const DELIVERY_FEE_PER_RESTAURANT: f64 = 150.0;

/// Number of distinct restaurants among the line items
pub fn distinct_restaurants(items: &[LineItem]) -> usize {
    items
        .iter()
        .map(LineItem::restaurant_id)
        .collect::<HashSet<_>>()
        .len()
}

/// `DELIVERY_FEE_PER_RESTAURANT × distinct restaurants`; 0 for an empty cart
pub fn calculate_delivery_fee(items: &[LineItem]) -> f64 {
    let restaurants = Decimal::from(distinct_restaurants(items) as u64);
    to_f64(to_decimal(DELIVERY_FEE_PER_RESTAURANT) * restaurants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Dish;

    fn item(dish_id: &str, restaurant_id: &str) -> LineItem {
        LineItem {
            id: format!("{}-default-", dish_id),
            dish: Dish {
                id: dish_id.to_string(),
                name: dish_id.to_string(),
                price: 100.0,
                category: "Any".to_string(),
                ingredients: vec![],
                restaurant_id: restaurant_id.to_string(),
                description: None,
                image: None,
                sizes: vec![],
                addon_ids: vec![],
            },
            quantity: 1,
            selected_size: None,
            selected_addons: vec![],
            total_price: 100.0,
        }
    }

    #[test]
    fn test_empty_cart_has_no_fee() {
        assert_eq!(calculate_delivery_fee(&[]), 0.0);
    }

    #[test]
    fn test_same_restaurant_charged_once() {
        let items = vec![item("d1", "r1"), item("d2", "r1"), item("d3", "r1")];
        assert_eq!(calculate_delivery_fee(&items), 150.0);
    }

    #[test]
    fn test_fee_per_distinct_restaurant() {
        let items = vec![item("d1", "r1"), item("d2", "r2"), item("d3", "r1")];
        assert_eq!(distinct_restaurants(&items), 2);
        assert_eq!(calculate_delivery_fee(&items), 300.0);
    }
}
