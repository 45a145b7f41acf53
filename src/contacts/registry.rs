use log::{debug, error, info, warn};

use crate::{
    Error,
    error::Result,
    config::Config,
    core::default_configuration::DEFAULT_CONTACTS_KEY,
    storage::{
        self,
        kv_store,
        KeyValueStore,
        load_document,
        store_document,
    },
    timestamp_ms,
};

use super::{
    contact::{self, Contact, ContactBuilder},
    group::{Group, GROUP_ID_PREFIX},
    registry_listener::RegistryListener,
};

#[derive(Default)]
pub struct RegistryBuilder<'a> {
    store: Option<Box<dyn KeyValueStore>>,
    cfg: Option<&'a dyn Config>,
    key: Option<&'a str>,
    listener: Option<Box<dyn RegistryListener>>,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(&mut self, store: Box<dyn KeyValueStore>) -> &mut Self {
        self.store = Some(store);
        self
    }

    pub fn with_config(&mut self, cfg: &'a dyn Config) -> &mut Self {
        self.cfg = Some(cfg);
        self
    }

    pub fn with_key(&mut self, key: &'a str) -> &mut Self {
        self.key = Some(key);
        self
    }

    pub fn with_listener(&mut self, listener: impl RegistryListener + 'static) -> &mut Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn build(&mut self) -> Result<ContactRegistry> {
        let store = match self.store.take() {
            Some(store) => store,
            None => match self.cfg {
                Some(cfg) => storage::open_store(cfg)?,
                None => return Err(Error::Argument("Missing key-value store!!!".into())),
            }
        };

        let key = self.key
            .or_else(|| self.cfg.map(|v| v.contacts_key()))
            .unwrap_or(DEFAULT_CONTACTS_KEY);
        if key.trim().is_empty() {
            return Err(Error::Argument("Empty contacts key".into()));
        }
        kv_store::check_key(key)?;

        let mut registry = ContactRegistry::new(store, key);
        registry.listener = self.listener.take();
        Ok(registry)
    }
}

pub struct ContactRegistry {
    store: Box<dyn KeyValueStore>,
    key: String,

    contacts: Vec<Contact>,
    groups: Vec<Group>,

    listener: Option<Box<dyn RegistryListener>>,
    last_stamp: u128,
}

impl ContactRegistry {
    pub fn new(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            contacts: Vec::new(),
            groups: Vec::new(),
            listener: None,
            last_stamp: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_listener(&mut self, listener: impl RegistryListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn initialize(&mut self) {
        match load_document::<Vec<Contact>>(&*self.store, &self.key) {
            Ok(Some(contacts)) => {
                info!("Loaded {} contacts from snapshot {}", contacts.len(), self.key);
                self.contacts = contacts;
            },
            Ok(None) => {
                info!("No contacts snapshot under {}, seeding sample contacts", self.key);
                self.contacts = contact::sample_contacts();
                self.persist();
            },
            Err(e) => {
                warn!("Failed to load contacts snapshot: {e}, falling back to sample contacts");
                self.contacts = contact::sample_contacts();
                self.persist();
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|v| v.id() == id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.contact(id).is_some()
    }

    pub fn add_contact(&mut self, input: &mut ContactBuilder) -> Result<Contact> {
        input.check_valid()?;

        let id = self.next_id("");
        let contact = input.with_id(&id).build()?;
        self.contacts.push(contact.clone());
        debug!("Contact {} added", contact.id());

        self.persist();
        if let Some(listener) = self.listener.as_ref() {
            listener.on_contact_added(&contact);
        }
        Ok(contact)
    }

    // Replaces the whole record; nothing from the previous version is kept.
    pub fn update_contact(&mut self, contact: Contact) -> Result<()> {
        contact.check_valid()?;

        let Some(slot) = self.contacts.iter_mut().find(|v| v.id() == contact.id()) else {
            return Err(Error::NotFound(format!("Contact {} not found", contact.id())));
        };
        *slot = contact;
        debug!("Contact {} updated", slot.id());

        if let Some(listener) = self.listener.as_ref() {
            listener.on_contact_updated(slot);
        }
        self.persist();
        Ok(())
    }

    // Group membership is left untouched.
    pub fn delete_contact(&mut self, id: &str) {
        let pos = self.contacts.iter().position(|v| v.id() == id);
        let removed = pos.map(|pos| self.contacts.remove(pos));

        self.persist();

        let Some(removed) = removed else {
            debug!("Contact {} not found, nothing deleted", id);
            return;
        };
        debug!("Contact {} deleted", id);
        if let Some(listener) = self.listener.as_ref() {
            listener.on_contact_deleted(&removed);
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|v| v.id() == id)
    }

    pub fn group_members(&self, id: &str) -> Vec<&Contact> {
        let Some(group) = self.group(id) else {
            return Vec::new();
        };
        group.members().iter().filter_map(|v| self.contact(v)).collect()
    }

    pub fn add_group<S: AsRef<str>>(&mut self, name: &str, member_ids: &[S]) -> Result<Group> {
        let mut members: Vec<String> = Vec::with_capacity(member_ids.len());
        for id in member_ids.iter().map(|v| v.as_ref()) {
            if members.iter().any(|v| v == id) {
                continue;
            }
            if !self.exists(id) {
                return Err(Error::Validation(format!("Unknown contact {} in group members", id)));
            }
            members.push(id.to_string());
        }

        let group = Group::new(self.next_id(GROUP_ID_PREFIX), name, members)?;
        self.groups.push(group.clone());
        debug!("Group {} added with {} members", group.id(), group.size());

        if let Some(listener) = self.listener.as_ref() {
            listener.on_group_added(&group);
        }
        Ok(group)
    }

    // An empty avatar clears it.
    pub fn set_group_avatar(&mut self, id: &str, avatar: &str) -> Result<()> {
        let Some(group) = self.groups.iter_mut().find(|v| v.id() == id) else {
            return Err(Error::NotFound(format!("Group {} not found", id)));
        };
        group.set_avatar(avatar);
        debug!("Group {} avatar updated", id);
        Ok(())
    }

    pub fn delete_group(&mut self, id: &str) {
        let Some(pos) = self.groups.iter().position(|v| v.id() == id) else {
            return;
        };
        let removed = self.groups.remove(pos);
        debug!("Group {} deleted", id);

        if let Some(listener) = self.listener.as_ref() {
            listener.on_group_deleted(&removed);
        }
    }

    // Time-based ids, kept strictly increasing within a session and
    // bumped past any id already taken.
    fn next_id(&mut self, prefix: &str) -> String {
        let mut stamp = timestamp_ms().max(self.last_stamp + 1);
        loop {
            let id = format!("{}{}", prefix, stamp);
            if !self.exists(&id) && self.group(&id).is_none() {
                self.last_stamp = stamp;
                return id;
            }
            stamp += 1;
        }
    }

    // Failures are logged and swallowed; the in-memory state stays authoritative.
    fn persist(&mut self) {
        let rc = store_document(&mut *self.store, &self.key, &self.contacts).map_err(|e| match e {
            Error::Persistence(_) => e,
            other => Error::Persistence(format!("Writing contacts snapshot error: {}", other)),
        });

        if let Err(e) = rc {
            error!("Failed to persist {} contacts under {}: {e}", self.contacts.len(), self.key);
            if let Some(listener) = self.listener.as_ref() {
                listener.on_persistence_failed(&e);
            }
        }
    }
}
