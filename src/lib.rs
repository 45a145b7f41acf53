pub mod core;
pub mod storage;
pub mod contacts;
pub mod session;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config, StoreKind},
    default_configuration as configuration,
    logger,
};

pub use crate::storage::{
    KeyValueStore,
    MemoryStore,
    FileStore,
    SqliteStore,
    open_store,
};

pub use crate::contacts::{
    search,
    Contact,
    ContactBuilder,
    ContactStatus,
    Group,
    ChatPreview,
    ContactRegistry,
    RegistryBuilder,
    RegistryListener,
};

pub use crate::session::{
    SessionStore,
    UserSession,
};

use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|v| v.as_millis())
        .unwrap_or_default()
}

pub(crate) fn is_none_or_empty<T: IsEmpty>(v: &Option<T>) -> bool {
    v.as_ref().map(|s| s.is_empty()).unwrap_or(true)
}

pub(crate) trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        self.trim().is_empty()
    }
}
