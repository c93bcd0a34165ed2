//! Cart-Level Calculator
//!
//! Recomputes every derived field of the cart top-down:
//! line item totals, subtotal, delivery fee and grand total.
//! Nothing is patched incrementally.

use super::delivery::calculate_delivery_fee;
use super::item_calculator::calculate_line_total;
use super::money::{to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::cart::{CartSnapshot, LineItem};

/// Derived money fields of a cart
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartTotals {
    /// Σ line item totals
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub discount: f64,
    /// subtotal + delivery_fee - discount
    pub total: f64,
}

/// Compute the totals for a set of items and an applied discount
pub fn calculate_cart_totals(items: &[LineItem], discount: f64) -> CartTotals {
    let subtotal: Decimal = items.iter().map(|item| to_decimal(item.total_price)).sum();
    let delivery_fee = calculate_delivery_fee(items);
    let total = subtotal + to_decimal(delivery_fee) - to_decimal(discount);

    CartTotals {
        subtotal: to_f64(subtotal),
        delivery_fee,
        discount,
        total: to_f64(total),
    }
}

/// Recompute every line total and the cart totals in place
pub fn recalculate_cart(cart: &mut CartSnapshot) {
    for item in &mut cart.items {
        item.total_price = calculate_line_total(
            &item.dish,
            item.quantity,
            item.selected_size.as_ref(),
            &item.selected_addons,
        );
    }

    let totals = calculate_cart_totals(&cart.items, cart.discount);
    cart.delivery_fee = totals.delivery_fee;
    cart.total = totals.total;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Dish;

    fn item(dish_id: &str, restaurant_id: &str, price: f64, quantity: i32) -> LineItem {
        LineItem {
            id: format!("{}-default-", dish_id),
            dish: Dish {
                id: dish_id.to_string(),
                name: dish_id.to_string(),
                price,
                category: "Any".to_string(),
                ingredients: vec![],
                restaurant_id: restaurant_id.to_string(),
                description: None,
                image: None,
                sizes: vec![],
                addon_ids: vec![],
            },
            quantity,
            selected_size: None,
            selected_addons: vec![],
            // deliberately stale
            total_price: 1.0,
        }
    }

    #[test]
    fn test_recalculate_overwrites_stale_values() {
        let mut cart = CartSnapshot {
            items: vec![item("d1", "r1", 450.0, 2), item("d2", "r2", 350.0, 1)],
            total: 99999.0,
            delivery_fee: 0.0,
            discount: 20.0,
            promo_code: Some("WELCOME20".to_string()),
        };

        recalculate_cart(&mut cart);

        assert_eq!(cart.items[0].total_price, 900.0);
        assert_eq!(cart.items[1].total_price, 350.0);
        assert_eq!(cart.delivery_fee, 300.0);
        // 1250 + 300 - 20
        assert_eq!(cart.total, 1530.0);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = calculate_cart_totals(&[], 0.0);
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn test_discount_kept_on_empty_cart() {
        let totals = calculate_cart_totals(&[], 20.0);
        assert_eq!(totals.total, -20.0);
        assert_eq!(totals.delivery_fee, 0.0);
    }
}
