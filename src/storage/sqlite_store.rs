use std::sync::{Mutex, MutexGuard};
use diesel::prelude::*;
use log::{debug, warn};

use crate::{
    Error,
    error::Result,
};

use super::kv_store::KeyValueStore;
use super::sqlite3::{
    self,
    models::NewEntry,
};

pub struct SqliteStore {
    connection: Mutex<SqliteConnection>,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self> {
        let mut conn = SqliteConnection::establish(path)?;

        // Bump VERSION and migrate here whenever the table layout changes.
        let ver = sqlite3::user_version(&mut conn);
        if ver != 0 && ver < sqlite3::VERSION {
            warn!("Dropping outdated key-value tables (user_version {})", ver);
            if !sqlite3::drop_tbs(&mut conn) {
                return Err(Error::Db("Failed to drop outdated db tables".into()));
            }
        }
        if !sqlite3::create_tbs(&mut conn) {
            return Err(Error::Db("Failed to create key-value tables".into()));
        }

        debug!("SQLite store opened at {}", path);
        Ok(Self { connection: Mutex::new(conn) })
    }

    fn conn(&self) -> Result<MutexGuard<'_, SqliteConnection>> {
        self.connection.lock().map_err(|_| {
            Error::Db("SQLite connection lock poisoned".into())
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = sqlite3::get_entry(&mut *self.conn()?, key)?;
        Ok(entry.map(|v| v.value))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        sqlite3::put_entry(&mut *self.conn()?, NewEntry { key, value })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        sqlite3::remove_entry(&mut *self.conn()?, key)?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(sqlite3::entry_keys(&mut *self.conn()?)?)
    }
}
