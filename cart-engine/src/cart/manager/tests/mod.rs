use super::*;
use crate::storage::{KvStore, StorageError, StorageResult};
use shared::error::{AppError, ErrorCode};

mod test_checkout;
mod test_promo;

fn test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

fn create_test_manager() -> CartManager {
    let store = CartStore::in_memory().unwrap();
    CartManager::new(store, test_catalog(), Arc::new(Session::signed_in("tester")))
}

fn create_manager_with_store(store: CartStore) -> CartManager {
    CartManager::new(store, test_catalog(), Arc::new(Session::signed_in("tester")))
}

fn create_manager_with_catalog(json: &str) -> CartManager {
    let store = CartStore::in_memory().unwrap();
    let catalog = Arc::new(Catalog::from_json(json).unwrap());
    CartManager::new(store, catalog, Arc::new(Session::signed_in("tester")))
}

fn create_signed_out_manager() -> CartManager {
    let store = CartStore::in_memory().unwrap();
    CartManager::new(store, test_catalog(), Arc::new(Session::new()))
}

fn dish(manager: &CartManager, id: &str) -> Dish {
    manager.catalog().dish(id).unwrap().clone()
}

fn size(dish: &Dish, id: &str) -> DishSize {
    dish.size(id).unwrap().clone()
}

fn addons(manager: &CartManager, ids: &[&str]) -> Vec<Addon> {
    ids.iter()
        .map(|id| manager.catalog().addon(id).unwrap().clone())
        .collect()
}

/// Add a dish without size or addons
fn add_plain(manager: &mut CartManager, dish_id: &str, quantity: i32) -> String {
    let dish = dish(manager, dish_id);
    manager.add_item(&dish, quantity, None, &[]).unwrap();
    line_item_key(&dish, None, &[])
}

// ========================================================================
// Helper: KV store whose writes always fail
// ========================================================================

struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(write_error())
    }
}

fn write_error() -> StorageError {
    StorageError::InvalidUtf8(String::from_utf8(vec![0xff, 0xfe]).unwrap_err())
}
