use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    error::Result,
};

use super::kv_store::KeyValueStore;

// Clones share the same underlying map, the way two handles onto the
// same local storage would.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| {
            Error::Persistence("Memory store lock poisoned".into())
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = self.entries()?.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        Ok(keys)
    }
}
