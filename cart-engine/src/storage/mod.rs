//! Persistence Adapter
//!
//! Key-value durable storage for the cart and the fulfillment mode.
//!
//! | Key | Value |
//! |-----|-------|
//! | `cart` | JSON `{ items, total, deliveryFee, discount, promoCode? }` |
//! | `orderType` | JSON string `"delivery"` or `"pickup"` |
//!
//! Reads never fail from the caller's point of view: storage errors and
//! malformed values are logged and replaced by defaults. Writes return a
//! [`StorageResult`] that the cart logs and otherwise ignores.

mod cart_store;
mod redb_store;

pub use cart_store::{CART_KEY, CartStore, FULFILLMENT_MODE_KEY};
pub use redb_store::RedbStore;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored value is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string key-value storage
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
