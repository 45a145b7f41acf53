use std::fmt;
use log::LevelFilter;

use crate::core::{
    Error,
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
    Sqlite,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Memory   => "memory",
            StoreKind::File     => "file",
            StoreKind::Sqlite   => "sqlite",
        }
    }
}

impl TryFrom<&str> for StoreKind {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "memory"    => Ok(StoreKind::Memory),
            "file"      => Ok(StoreKind::File),
            "sqlite"    => Ok(StoreKind::Sqlite),
            _ => Err(Error::Argument(format!("Unsupported store kind: {}", input)))
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait Config: Send + Sync {
    fn data_dir(&self) -> &str;
    fn store_kind(&self) -> StoreKind;
    fn contacts_key(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
