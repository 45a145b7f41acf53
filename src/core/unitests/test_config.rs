use std::fs;
use log::LevelFilter;
use crate::core::{
    config::StoreKind,
    default_configuration::{Builder, DEFAULT_CONTACTS_KEY},
    Error,
};

#[test]
fn test_store_kind() {
    assert_eq!(StoreKind::try_from("memory"), Ok(StoreKind::Memory));
    assert_eq!(StoreKind::try_from(" File "), Ok(StoreKind::File));
    assert_eq!(StoreKind::try_from("SQLITE"), Ok(StoreKind::Sqlite));
    assert_eq!(matches!(StoreKind::try_from("redis"), Err(Error::Argument(_))), true);
    assert_eq!(StoreKind::Sqlite.to_string(), "sqlite");
}

#[test]
fn test_build_defaults() {
    let cfg = Builder::new()
        .with_data_dir("/tmp/messenger")
        .build()
        .unwrap();

    assert_eq!(cfg.data_dir(), "/tmp/messenger");
    assert_eq!(cfg.store_kind(), StoreKind::File);
    assert_eq!(cfg.contacts_key(), DEFAULT_CONTACTS_KEY);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file().is_none(), true);
}

#[test]
fn test_home_expansion() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    let cfg = Builder::new()
        .with_data_dir("~/chat")
        .build()
        .unwrap();
    assert_eq!(cfg.data_dir(), format!("{}/chat", home));

    let cfg = Builder::new().with_data_dir("~").build().unwrap();
    assert_eq!(cfg.data_dir(), home);

    let cfg = Builder::new().with_data_dir("~bob/chat").build().unwrap();
    assert_eq!(cfg.data_dir(), "~bob/chat");
}

#[test]
fn test_invalid_contacts_key() {
    let result = Builder::new()
        .with_contacts_key("my contacts")
        .build()
        .map(|_| ());
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);

    let result = Builder::new()
        .with_contacts_key("../contacts")
        .build()
        .map(|_| ());
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);

    let cfg = Builder::new()
        .with_contacts_key("contacts.v2")
        .build()
        .unwrap();
    assert_eq!(cfg.contacts_key(), "contacts.v2");
}

#[test]
fn test_load_and_override() {
    let path = std::env::temp_dir().join("messenger-config-unit.conf");
    fs::write(&path, r#"{
        "dataDir": "/var/lib/messenger",
        "store": "sqlite",
        "contactsKey": "people",
        "logger": { "level": "debug", "logFile": "messenger.log" }
    }"#).unwrap();

    let cfg = Builder::new()
        .load(path.to_str().unwrap())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(cfg.data_dir(), "/var/lib/messenger");
    assert_eq!(cfg.store_kind(), StoreKind::Sqlite);
    assert_eq!(cfg.contacts_key(), "people");
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("messenger.log"));

    let cfg = Builder::new()
        .load(path.to_str().unwrap())
        .unwrap()
        .with_store(StoreKind::Memory)
        .with_contacts_key("friends")
        .with_logger(LevelFilter::Warn, None)
        .build()
        .unwrap();
    assert_eq!(cfg.store_kind(), StoreKind::Memory);
    assert_eq!(cfg.contacts_key(), "friends");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), None);

    _ = fs::remove_file(&path);
}

#[test]
fn test_load_errors() {
    let result = Builder::new().load("/nonexistent/messenger.conf").map(|_| ());
    assert_eq!(matches!(result, Err(Error::Io(_))), true);

    let path = std::env::temp_dir().join("messenger-config-bad.conf");
    fs::write(&path, "{ not json").unwrap();
    let result = Builder::new().load(path.to_str().unwrap()).map(|_| ());
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);

    fs::write(&path, r#"{ "store": "redis" }"#).unwrap();
    let result = Builder::new()
        .load(path.to_str().unwrap())
        .unwrap()
        .build()
        .map(|_| ());
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);
    _ = fs::remove_file(&path);
}
