//! Catalog - static restaurants, dishes, addons and promo codes
//!
//! Loaded once at startup (built-in seed data or a JSON file) and shared
//! read-only through `Arc<Catalog>`. References between entities are
//! checked on load so lookups at runtime never dangle.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Addon, AddonCategory, Dish, PromoCode, Restaurant};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Seed catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read-only catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
    #[serde(default)]
    dishes: Vec<Dish>,
    #[serde(default)]
    addons: Vec<Addon>,
    #[serde(default)]
    promo_codes: Vec<PromoCode>,
}

impl Catalog {
    /// The seed catalog embedded in the binary
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("Invalid catalog JSON: {}", e))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::CatalogLoadFailed,
                format!("Failed to read catalog {}: {}", path.display(), e),
            )
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            restaurants = catalog.restaurants.len(),
            dishes = catalog.dishes.len(),
            promo_codes = catalog.promo_codes.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> AppResult<()> {
        let restaurant_ids: HashSet<&str> =
            self.restaurants.iter().map(|r| r.id.as_str()).collect();
        let addon_ids: HashSet<&str> = self.addons.iter().map(|a| a.id.as_str()).collect();

        for dish in &self.dishes {
            if !restaurant_ids.contains(dish.restaurant_id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::CatalogLoadFailed,
                    format!(
                        "Dish {} references unknown restaurant {}",
                        dish.id, dish.restaurant_id
                    ),
                ));
            }
            if let Some(missing) = dish
                .addon_ids
                .iter()
                .find(|id| !addon_ids.contains(id.as_str()))
            {
                return Err(AppError::with_message(
                    ErrorCode::CatalogLoadFailed,
                    format!("Dish {} references unknown addon {}", dish.id, missing),
                ));
            }
        }
        Ok(())
    }

    // ========== Lookups ==========

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn promo_codes(&self) -> &[PromoCode] {
        &self.promo_codes
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn addon(&self, id: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.id == id)
    }

    pub fn dishes_for_restaurant(&self, restaurant_id: &str) -> Vec<&Dish> {
        self.dishes
            .iter()
            .filter(|d| d.restaurant_id == restaurant_id)
            .collect()
    }

    /// Addons offered for a dish, grouped by addon category
    pub fn addons_for(&self, dish: &Dish) -> BTreeMap<AddonCategory, Vec<&Addon>> {
        let mut grouped: BTreeMap<AddonCategory, Vec<&Addon>> = BTreeMap::new();
        for addon in dish.addon_ids.iter().filter_map(|id| self.addon(id)) {
            grouped.entry(addon.category).or_default().push(addon);
        }
        grouped
    }

    /// Resolve selected addon ids for a dish
    pub fn resolve_addons(&self, dish: &Dish, addon_ids: &[&str]) -> AppResult<Vec<Addon>> {
        addon_ids
            .iter()
            .map(|id| {
                self.addon(id)
                    .filter(|_| dish.offers_addon(id))
                    .cloned()
                    .ok_or_else(|| {
                        AppError::with_message(
                            ErrorCode::InvalidAddon,
                            format!("Addon {} is not available for {}", id, dish.name),
                        )
                    })
            })
            .collect()
    }
}
