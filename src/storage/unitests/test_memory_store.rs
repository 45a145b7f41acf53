use crate::storage::{
    KeyValueStore,
    MemoryStore,
    load_document,
    store_document,
};

#[test]
fn test_put_get_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("contacts").unwrap(), None);
    assert_eq!(store.contains("contacts").unwrap(), false);

    store.put("contacts", "[]").unwrap();
    assert_eq!(store.get("contacts").unwrap().as_deref(), Some("[]"));

    store.put("contacts", "[1]").unwrap();
    assert_eq!(store.get("contacts").unwrap().as_deref(), Some("[1]"));

    store.put("user", "{}").unwrap();
    assert_eq!(store.keys().unwrap(), vec!["contacts".to_string(), "user".to_string()]);

    store.remove("contacts").unwrap();
    store.remove("contacts").unwrap();
    assert_eq!(store.get("contacts").unwrap(), None);
}

#[test]
fn test_shared_handles() {
    let mut store = MemoryStore::new();
    let other = store.clone();

    store.put("k", "v").unwrap();
    assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_documents() {
    let mut store = MemoryStore::new();
    let names = vec!["Sarah".to_string(), "David".to_string()];

    store_document(&mut store, "names", &names).unwrap();
    let loaded: Option<Vec<String>> = load_document(&store, "names").unwrap();
    assert_eq!(loaded, Some(names));

    let missing: Option<Vec<String>> = load_document(&store, "missing").unwrap();
    assert_eq!(missing, None);

    store.put("names", "not json").unwrap();
    let result = load_document::<Vec<String>>(&store, "names");
    assert_eq!(matches!(result, Err(crate::Error::Persistence(_))), true);
}
