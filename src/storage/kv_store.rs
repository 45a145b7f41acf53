use serde::{de::DeserializeOwned, Serialize};

use crate::{
    Error,
    error::Result,
};

// Whole-document key/value storage: every put overwrites the previous value.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;

    fn contains(&self, key: &str) -> Result<bool> {
        self.get(key).map(|v| v.is_some())
    }
}

pub fn load_document<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(data) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str::<T>(&data).map(Some).map_err(|e| {
        Error::Persistence(format!("Failed to parse document under key {key}: {e}"))
    })
}

pub fn store_document<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let data = serde_json::to_string(value).map_err(|e| {
        Error::Persistence(format!("Failed to serialize document for key {key}: {e}"))
    })?;
    store.put(key, &data)
}

pub(crate) fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::Argument("Empty storage key".into()));
    }

    let valid = key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if !valid || key.starts_with('.') {
        return Err(Error::Argument(format!("Invalid storage key: {}", key)));
    }
    Ok(())
}
