//! redb-backed key-value store
//!
//! A single `kv` table of `&str -> &[u8]` (UTF-8 JSON). redb commits are
//! durable as soon as `commit()` returns.

use super::{KvStore, StorageResult};
use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table for key-value pairs: key = storage key, value = UTF-8 JSON
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Key-value store backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").field("db", &"<redb::Database>").finish()
    }
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open a non-durable in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so read transactions never miss it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(Some(String::from_utf8(guard.value().to_vec())?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value.as_bytes())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
