//! CartManager - the cart state machine
//!
//! Owns the cart exclusively. Every operation runs to completion before the
//! next one starts (`&mut self`), so no locking is involved.
//!
//! # Operation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Precondition checks (session, quantity, configuration, promo)
//!     ├─ 2. Clone the current cart
//!     ├─ 3. Apply the change to the clone
//!     ├─ 4. Recalculate line totals, delivery fee and total
//!     ├─ 5. Adopt the clone as the current cart
//!     └─ 6. Persist (fire-and-forget, failures logged)
//! ```
//!
//! A failed precondition returns a [`CartError`] and leaves the cart as it
//! was. An applied promo is kept when the cart becomes empty; only
//! `remove_promo` and `clear_cart` drop it.

mod error;
pub use error::*;
pub use shared::cart::MAX_QUANTITY;

use super::checkout::OrderReceipt;
use crate::auth::Session;
use crate::pricing::{
    self, PromoRejection, line_item_key, normalize_addons, recalculate_cart, unique_line_id,
};
use crate::services::Catalog;
use crate::storage::CartStore;
use shared::cart::{CartSnapshot, FulfillmentMode, LineItem};
use shared::models::{Addon, Dish, DishSize};
use std::sync::Arc;

/// Cart states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// Cart state machine
pub struct CartManager {
    cart: CartSnapshot,
    fulfillment_mode: FulfillmentMode,
    catalog: Arc<Catalog>,
    session: Arc<Session>,
    store: CartStore,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.cart.items.len())
            .field("total", &self.cart.total)
            .field("fulfillment_mode", &self.fulfillment_mode)
            .field("store", &"<CartStore>")
            .finish()
    }
}

impl CartManager {
    /// Create a manager, restoring cart and fulfillment mode from the store
    pub fn new(store: CartStore, catalog: Arc<Catalog>, session: Arc<Session>) -> Self {
        let cart = store.load_cart();
        let fulfillment_mode = store.load_fulfillment_mode();
        tracing::info!(
            items = cart.items.len(),
            total = cart.total,
            fulfillment_mode = %fulfillment_mode,
            "CartManager started"
        );
        Self {
            cart,
            fulfillment_mode,
            catalog,
            session,
            store,
        }
    }

    // ========== Read-only accessors ==========

    pub fn cart(&self) -> &CartSnapshot {
        &self.cart
    }

    pub fn state(&self) -> CartState {
        if self.cart.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> i32 {
        self.cart.item_count()
    }

    /// Sum of quantities across all configurations of a dish
    pub fn item_quantity(&self, dish_id: &str) -> i32 {
        self.cart.item_quantity(dish_id)
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    /// Amount due in the current fulfillment mode
    pub fn payable_total(&self) -> f64 {
        self.cart.payable_total(self.fulfillment_mode)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    // ========== Fulfillment mode ==========

    pub fn fulfillment_mode(&self) -> FulfillmentMode {
        self.fulfillment_mode
    }

    /// Switch between delivery and pickup (persisted under its own key)
    pub fn set_fulfillment_mode(&mut self, mode: FulfillmentMode) {
        self.fulfillment_mode = mode;
        if let Err(e) = self.store.save_fulfillment_mode(mode) {
            tracing::warn!(error = %e, mode = %mode, "Failed to persist fulfillment mode");
        }
        tracing::debug!(mode = %mode, "Fulfillment mode changed");
    }

    // ========== Mutations ==========

    /// Add a dish configuration, merging with an identical line item
    pub fn add_item(
        &mut self,
        dish: &Dish,
        quantity: i32,
        size: Option<&DishSize>,
        addons: &[Addon],
    ) -> CartResult<()> {
        if !self.session.is_authenticated() {
            tracing::warn!(dish_id = %dish.id, "Add to cart rejected: not authenticated");
            return Err(CartError::NotAuthenticated);
        }
        validate_quantity(quantity)?;

        if let Some(size) = size
            && dish.size(&size.id).is_none()
        {
            return Err(CartError::InvalidSize {
                dish_id: dish.id.clone(),
                size_id: size.id.clone(),
            });
        }
        if let Some(addon) = addons.iter().find(|a| !dish.offers_addon(&a.id)) {
            return Err(CartError::InvalidAddon {
                dish_id: dish.id.clone(),
                addon_id: addon.id.clone(),
            });
        }

        let addons = normalize_addons(addons);
        let existing = self
            .cart
            .items
            .iter()
            .find(|item| item.matches_configuration(dish, size, &addons))
            .map(|item| (item.id.clone(), item.quantity));

        if let Some((_, current)) = &existing {
            validate_quantity(current + quantity)?;
        }
        let line_item_id = match existing {
            Some((id, _)) => id,
            None => unique_line_id(&self.cart.items, line_item_key(dish, size, &addons)),
        };

        self.apply(|cart| {
            match cart.items.iter_mut().find(|item| item.id == line_item_id) {
                Some(item) => item.quantity += quantity,
                None => cart.items.push(LineItem {
                    id: line_item_id.clone(),
                    dish: dish.clone(),
                    quantity,
                    selected_size: size.cloned(),
                    selected_addons: addons,
                    total_price: 0.0,
                }),
            }
        });

        tracing::debug!(
            line_item_id = %line_item_id,
            quantity,
            total = self.cart.total,
            "Item added to cart"
        );
        Ok(())
    }

    /// Replace a line item's quantity; `quantity <= 0` removes it
    pub fn update_item(&mut self, line_item_id: &str, quantity: i32) -> CartResult<()> {
        if quantity <= 0 {
            return self.remove_item(line_item_id);
        }
        if self.cart.find_item(line_item_id).is_none() {
            return Err(CartError::ItemNotFound(line_item_id.to_string()));
        }
        validate_quantity(quantity)?;

        self.apply(|cart| {
            if let Some(item) = cart.items.iter_mut().find(|item| item.id == line_item_id) {
                item.quantity = quantity;
            }
        });

        tracing::debug!(line_item_id, quantity, total = self.cart.total, "Cart item updated");
        Ok(())
    }

    /// Delete a line item
    pub fn remove_item(&mut self, line_item_id: &str) -> CartResult<()> {
        if self.cart.find_item(line_item_id).is_none() {
            return Err(CartError::ItemNotFound(line_item_id.to_string()));
        }

        self.apply(|cart| cart.items.retain(|item| item.id != line_item_id));

        tracing::debug!(line_item_id, total = self.cart.total, "Cart item removed");
        Ok(())
    }

    /// Decrement the first line item of a dish, removing it at quantity 1
    pub fn remove_one_by_dish_id(&mut self, dish_id: &str) -> CartResult<()> {
        let (line_item_id, quantity) = self
            .cart
            .items
            .iter()
            .find(|item| item.dish_id() == dish_id)
            .map(|item| (item.id.clone(), item.quantity))
            .ok_or_else(|| CartError::ItemNotFound(dish_id.to_string()))?;

        if quantity > 1 {
            self.update_item(&line_item_id, quantity - 1)
        } else {
            self.remove_item(&line_item_id)
        }
    }

    /// Reset to an empty cart (items, discount and promo code)
    pub fn clear_cart(&mut self) {
        self.cart = CartSnapshot::new();
        self.persist();
        tracing::debug!("Cart cleared");
    }

    /// Apply a promo code; at most one can be active
    ///
    /// Returns the granted discount. On rejection the cart is unchanged.
    pub fn apply_promo(&mut self, code: &str) -> CartResult<f64> {
        if let Some(applied) = &self.cart.promo_code {
            tracing::debug!(code, applied = %applied, "Promo rejected: already applied");
            return Err(CartError::Promo(PromoRejection::AlreadyApplied));
        }

        let subtotal = self.cart.subtotal();
        let promos = self.catalog.promo_codes();
        let discount = pricing::validate_promo(code, promos, &self.cart.items, subtotal)
            .inspect_err(|rejection| {
                tracing::debug!(code, reason = %rejection, "Promo rejected");
            })?;
        let canonical = pricing::find_active_promo(code, promos)
            .map(|p| p.code.clone())
            .unwrap_or_else(|| code.trim().to_uppercase());

        self.apply(|cart| {
            cart.promo_code = Some(canonical.clone());
            cart.discount = discount;
        });

        tracing::info!(code = %canonical, discount, total = self.cart.total, "Promo applied");
        Ok(discount)
    }

    /// Drop the applied promo code and its discount
    pub fn remove_promo(&mut self) {
        let removed = self.cart.promo_code.clone();
        self.apply(|cart| {
            cart.promo_code = None;
            cart.discount = 0.0;
        });
        if let Some(code) = removed {
            tracing::info!(code = %code, total = self.cart.total, "Promo removed");
        }
    }

    /// Simulate checkout: build a receipt and clear the cart
    pub fn checkout(&mut self) -> CartResult<OrderReceipt> {
        let user = self.session.current_user().ok_or(CartError::NotAuthenticated)?;
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let receipt = OrderReceipt::from_cart(&self.cart, self.fulfillment_mode, &user);
        self.clear_cart();

        tracing::info!(
            order_id = receipt.order_id,
            customer = %receipt.customer,
            total = receipt.total,
            fulfillment_mode = %receipt.fulfillment_mode,
            "Order placed"
        );
        Ok(receipt)
    }

    // ========== Internal ==========

    /// Mutate a copy, recompute every derived field, adopt it, persist
    fn apply(&mut self, change: impl FnOnce(&mut CartSnapshot)) {
        let mut next = self.cart.clone();
        change(&mut next);
        recalculate_cart(&mut next);
        self.cart = next;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_cart(&self.cart) {
            tracing::warn!(error = %e, "Failed to persist cart, keeping in-memory state");
        }
    }
}

fn validate_quantity(quantity: i32) -> CartResult<()> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
