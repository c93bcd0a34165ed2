//! Line Item Price Calculator
//!
//! `(size price or dish price + Σ addon price) × quantity`, computed with
//! rust_decimal. Also builds line item ids and normalizes restored lines.

use super::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use shared::cart::{LineItem, MAX_QUANTITY};
use shared::models::{Addon, Dish, DishSize};

/// Sentinel used in the identity key when no size is selected
pub const DEFAULT_SIZE_KEY: &str = "default";

/// Per-unit price: the size price replaces the base price, addons add on top
pub fn unit_price(dish: &Dish, size: Option<&DishSize>, addons: &[Addon]) -> Decimal {
    let base = to_decimal(size.map_or(dish.price, |s| s.price));
    let addons_total: Decimal = addons.iter().map(|a| to_decimal(a.price)).sum();
    base + addons_total
}

/// Line total for a dish configuration
///
/// `quantity` must be positive; callers validate it.
pub fn calculate_line_total(
    dish: &Dish,
    quantity: i32,
    size: Option<&DishSize>,
    addons: &[Addon],
) -> f64 {
    to_f64(unit_price(dish, size, addons) * Decimal::from(quantity))
}

/// Sort addons by id and drop duplicates (addon selection is a set)
pub fn normalize_addons(addons: &[Addon]) -> Vec<Addon> {
    let mut normalized = addons.to_vec();
    normalized.sort_by(|a, b| a.id.cmp(&b.id));
    normalized.dedup_by(|a, b| a.id == b.id);
    normalized
}

/// Line id: `{dish_id}-{size_id|default}-{addon ids, sorted, comma separated}`
///
/// Hyphenated ids can make two configurations render the same string;
/// [`unique_line_id`] resolves that before the id is stored.
pub fn line_item_key(dish: &Dish, size: Option<&DishSize>, addons: &[Addon]) -> String {
    let mut addon_ids: Vec<&str> = addons.iter().map(|a| a.id.as_str()).collect();
    addon_ids.sort_unstable();
    addon_ids.dedup();

    format!(
        "{}-{}-{}",
        dish.id,
        size.map_or(DEFAULT_SIZE_KEY, |s| s.id.as_str()),
        addon_ids.join(",")
    )
}

/// Line id for a new configuration, suffixed `#n` if the plain id is taken
pub fn unique_line_id(items: &[LineItem], key: String) -> String {
    let taken = |id: &str| items.iter().any(|item| item.id == id);
    if !taken(&key) {
        return key;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}#{}", key, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Normalize restored line items
///
/// Drops non-positive quantities, normalizes addons, merges lines holding
/// the same configuration, caps quantities at [`MAX_QUANTITY`] and rebuilds
/// every id from the configuration.
pub fn rebuild_line_items(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut rebuilt: Vec<LineItem> = Vec::with_capacity(items.len());

    for mut item in items.into_iter().filter(|item| item.quantity > 0) {
        item.selected_addons = normalize_addons(&item.selected_addons);

        let size = item.selected_size.as_ref();
        let existing = rebuilt
            .iter_mut()
            .find(|line| line.matches_configuration(&item.dish, size, &item.selected_addons));
        if let Some(line) = existing {
            line.quantity = line.quantity.saturating_add(item.quantity).min(MAX_QUANTITY);
            continue;
        }

        item.quantity = item.quantity.min(MAX_QUANTITY);
        let key = line_item_key(&item.dish, size, &item.selected_addons);
        item.id = unique_line_id(&rebuilt, key);
        rebuilt.push(item);
    }

    rebuilt
}
