use std::path::Path;
use serial_test::serial;

use messenger::{
    Error,
    ContactBuilder,
    ContactRegistry,
    ContactStatus,
    FileStore,
    KeyValueStore,
    MemoryStore,
    RegistryBuilder,
    SqliteStore,
    StoreKind,
    configuration,
};

use crate::{
    working_path,
    remove_working_path,
};

/*  APIs for testcase
 - RegistryBuilder::new()
 - with_store(..)
 - with_config(..)
 - with_key(..)
 - build()
 - ContactRegistry::initialize()      [V]
 - add_contact(..)                    [V]
 - update_contact(..)                 [V]
 - delete_contact(..)                 [V]
 - contact(..)                        [V]
 - add_group(..)                      [V]
 - delete_group(..)                   [V]
 */

fn session_mutations(registry: &mut ContactRegistry) {
    let bob = registry.add_contact(ContactBuilder::new()
        .with_name("Bob")
        .with_phone("555")
    ).unwrap();

    let mut updated = bob.clone();
    updated.set_email("bob@example.com");
    updated.set_status(ContactStatus::Online);
    registry.update_contact(updated).unwrap();

    registry.delete_contact("4");
    registry.add_group("Team", &["1", bob.id()]).unwrap();
}

#[test]
fn test_validation_scenarios() {
    let mut registry = RegistryBuilder::new()
        .with_store(Box::new(MemoryStore::new()))
        .build()
        .unwrap();
    registry.initialize();

    let rc = registry.add_contact(ContactBuilder::new().with_name("").with_phone("555"));
    assert_eq!(matches!(rc, Err(Error::Validation(_))), true);

    let rc = registry.add_contact(ContactBuilder::new().with_name("Bob").with_phone("").with_email(""));
    assert_eq!(matches!(rc, Err(Error::Validation(_))), true);

    let rc = registry.add_contact(ContactBuilder::new().with_name("Bob").with_phone("555"));
    assert_eq!(rc.is_ok(), true);
}

#[test]
fn test_group_scenarios() {
    let mut registry = RegistryBuilder::new()
        .with_store(Box::new(MemoryStore::new()))
        .build()
        .unwrap();
    registry.initialize();

    let rc = registry.add_group("Team", &Vec::<String>::new());
    assert_eq!(rc.is_err(), true);

    let rc = registry.add_group("Team", &["1", "1", "2"]);
    assert_eq!(rc.is_ok(), true);
    assert_eq!(rc.unwrap().members().len(), 2);
}

#[test]
fn test_round_trip_memory() {
    let store = MemoryStore::new();

    let mut registry = RegistryBuilder::new()
        .with_store(Box::new(store.clone()))
        .build()
        .unwrap();
    registry.initialize();
    session_mutations(&mut registry);
    let expected = registry.contacts().to_vec();
    drop(registry);

    let mut registry = RegistryBuilder::new()
        .with_store(Box::new(store))
        .build()
        .unwrap();
    registry.initialize();
    assert_eq!(registry.contacts(), expected.as_slice());
    assert_eq!(registry.groups().is_empty(), true);
}

#[test]
#[serial]
fn test_round_trip_file() {
    remove_working_path(&std::env::temp_dir().join("messenger-apitests-file").display().to_string());
    let path = working_path("messenger-apitests-file");
    let expected = {
        let store = FileStore::open(Path::new(&path)).unwrap();
        let mut registry = ContactRegistry::new(Box::new(store), "contacts");
        registry.initialize();
        session_mutations(&mut registry);
        registry.contacts().to_vec()
    };

    let store = FileStore::open(Path::new(&path)).unwrap();
    let document = store.get("contacts").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(json.as_array().map(|v| v.len()), Some(expected.len()));
    assert_eq!(json[0]["id"], "1");
    assert_eq!(json[0]["status"], "online");
    assert_eq!(json[0]["avatar"], "/placeholder.svg");

    let mut registry = ContactRegistry::new(Box::new(store), "contacts");
    registry.initialize();
    assert_eq!(registry.contacts(), expected.as_slice());

    remove_working_path(&path);
}

#[test]
#[serial]
fn test_round_trip_sqlite() {
    remove_working_path(&std::env::temp_dir().join("messenger-apitests-sqlite").display().to_string());
    let dir = working_path("messenger-apitests-sqlite");
    let cfg = configuration::Builder::new()
        .with_data_dir(&dir)
        .with_store(StoreKind::Sqlite)
        .build()
        .unwrap();

    let expected = {
        let mut registry = RegistryBuilder::new()
            .with_config(cfg.as_ref())
            .build()
            .unwrap();
        registry.initialize();
        session_mutations(&mut registry);
        registry.contacts().to_vec()
    };

    let store = SqliteStore::open(&format!("{}/messenger.db", dir)).unwrap();
    assert_eq!(store.keys().unwrap(), vec!["contacts".to_string()]);

    let mut registry = RegistryBuilder::new()
        .with_store(Box::new(store))
        .build()
        .unwrap();
    registry.initialize();
    assert_eq!(registry.contacts(), expected.as_slice());
    drop(registry);

    remove_working_path(&dir);
}

#[test]
#[serial]
fn test_unstorable_key_on_file_store() {
    remove_working_path(&std::env::temp_dir().join("messenger-apitests-badkey").display().to_string());
    let path = working_path("messenger-apitests-badkey");

    let store = FileStore::open(Path::new(&path)).unwrap();
    let rc = RegistryBuilder::new()
        .with_store(Box::new(store))
        .with_key("my contacts")
        .build();
    assert_eq!(matches!(rc, Err(Error::Argument(_))), true);

    let rc = configuration::Builder::new()
        .with_data_dir(&path)
        .with_store(StoreKind::File)
        .with_contacts_key("my contacts")
        .build();
    assert_eq!(matches!(rc.map(|_| ()), Err(Error::Argument(_))), true);

    let store = FileStore::open(Path::new(&path)).unwrap();
    assert_eq!(store.keys().unwrap().is_empty(), true);

    remove_working_path(&path);
}
