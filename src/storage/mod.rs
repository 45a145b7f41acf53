mod file_store;
mod memory_store;
mod sqlite_store;
mod sqlite3;

pub mod kv_store;

pub use kv_store::{
    KeyValueStore,
    load_document,
    store_document,
};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use std::fs;
use std::path::Path;
use log::info;

use crate::{
    Error,
    error::Result,
    config::{Config, StoreKind},
};

pub const SQLITE_DB_FILE: &str = "messenger.db";

pub fn open_store(cfg: &dyn Config) -> Result<Box<dyn KeyValueStore>> {
    let dir = Path::new(cfg.data_dir());
    info!("Opening {} store under {}", cfg.store_kind(), dir.display());

    match cfg.store_kind() {
        StoreKind::Memory => Ok(Box::new(MemoryStore::new())),
        StoreKind::File => Ok(Box::new(FileStore::open(dir)?)),
        StoreKind::Sqlite => {
            fs::create_dir_all(dir).map_err(|e| {
                Error::Argument(format!("Failed to create directory {}: {e}", dir.display()))
            })?;
            let path = dir.join(SQLITE_DB_FILE);
            let Some(path) = path.to_str() else {
                return Err(Error::Argument(format!("Invalid database path {}", path.display())));
            };
            Ok(Box::new(SqliteStore::open(path)?))
        }
    }
}
