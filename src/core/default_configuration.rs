use std::env;
use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::core::{
    config::Config,
    config::StoreKind,
    Error,
    Result,
};
use crate::storage::kv_store::check_key;

pub const DEFAULT_CONTACTS_KEY: &str = "contacts";
const DEFAULT_DATA_DIR: &str = ".messenger";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "dataDir")]
    data_dir    : Option<String>,
    #[serde(rename = "store")]
    store       : Option<String>,
    #[serde(rename = "contactsKey")]
    contacts_key: Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,

    #[serde(skip)]
    deserde_store: Option<StoreKind>,
}

pub struct Builder<'a> {
    data_dir    : Option<String>,
    store       : Option<StoreKind>,
    contacts_key: Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

// Only a bare "~" or a leading "~/" names the home directory.
fn expand_home(input: &str) -> String {
    match input.strip_prefix("~") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{}{}", home, rest)
        },
        _ => input.to_string()
    }
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_dir    : None,
            store       : None,
            contacts_key: None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_data_dir(&mut self, input: &str) -> &mut Self {
        self.data_dir = Some(expand_home(input));
        self
    }

    pub fn with_store(&mut self, kind: StoreKind) -> &mut Self {
        self.store = Some(kind);
        self
    }

    pub fn with_contacts_key(&mut self, key: &'a str) -> &mut Self {
        self.contacts_key = Some(key);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                data_dir    : None,
                store       : None,
                contacts_key: None,
                logger      : None,
                deserde_store: None,
            }
        };

        cfg.data_dir = match b.data_dir.as_ref() {
            Some(dir) => Some(dir.clone()),
            None => Some(cfg.data_dir.as_deref().map(expand_home).unwrap_or_else(|| {
                expand_home(&format!("~/{}", DEFAULT_DATA_DIR))
            }))
        };

        cfg.deserde_store = match b.store {
            Some(kind) => Some(kind),
            None => match cfg.store.as_deref() {
                Some(v) => Some(StoreKind::try_from(v)?),
                None => Some(StoreKind::File),
            }
        };

        if let Some(key) = b.contacts_key {
            cfg.contacts_key = Some(key.to_string());
        }
        if cfg.contacts_key.as_ref().map_or(true, |v| v.trim().is_empty()) {
            cfg.contacts_key = Some(DEFAULT_CONTACTS_KEY.to_string());
        }
        if let Some(key) = cfg.contacts_key.as_deref() {
            check_key(key)?;
        }

        if let Some(level) = b.log_level {
            cfg.logger = Some(LogCfg {
                level: level.to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(level),
            });
        } else if let Some(ref mut logger) = cfg.logger {
            logger.deserde_level = Some(logger.level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info));
        } else {
            cfg.logger = Some(LogCfg {
                level: LevelFilter::Info.to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(LevelFilter::Info),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(".")
    }

    fn store_kind(&self) -> StoreKind {
        self.deserde_store.unwrap_or(StoreKind::File)
    }

    fn contacts_key(&self) -> &str {
        self.contacts_key.as_deref().unwrap_or(DEFAULT_CONTACTS_KEY)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataDir:{},store:{},contactsKey:{},logger:{}",
            self.data_dir(),
            self.store_kind(),
            self.contacts_key(),
            self.log_level()
        )?;
        if let Some(file) = self.log_file() {
            write!(f, ",logFile:{}", file)?;
        }
        Ok(())
    }
}
