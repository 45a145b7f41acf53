use serial_test::serial;

use crate::storage::{
    KeyValueStore,
    SqliteStore,
};

use super::{
    working_path,
    remove_working_path,
};

#[test]
#[serial]
fn test_sqlite_store() {
    let dir = working_path("messenger-sqlite-store");
    let path = format!("{}/kv.db", dir);

    let mut store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("contacts").unwrap(), None);

    store.put("contacts", "[]").unwrap();
    assert_eq!(store.get("contacts").unwrap().as_deref(), Some("[]"));

    store.put("contacts", r#"[{"id":"1"}]"#).unwrap();
    assert_eq!(store.get("contacts").unwrap().as_deref(), Some(r#"[{"id":"1"}]"#));

    store.put("user", "{}").unwrap();
    assert_eq!(store.keys().unwrap(), vec!["contacts".to_string(), "user".to_string()]);

    store.remove("user").unwrap();
    store.remove("user").unwrap();
    assert_eq!(store.contains("user").unwrap(), false);

    drop(store);
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("contacts").unwrap().as_deref(), Some(r#"[{"id":"1"}]"#));
    drop(store);

    remove_working_path(&dir);
}
