use serde::{Deserialize, Serialize};
use log::{info, warn};

use crate::{
    Error,
    error::Result,
    contacts::DEFAULT_AVATAR,
    storage::{
        KeyValueStore,
        load_document,
        store_document,
    },
};

pub const SESSION_KEY: &str = "user";

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

// The profile editor writes phone and bio into the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "id", default)]
    id: String,
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "email")]
    email: String,
    #[serde(rename = "phone", default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(rename = "avatar", default = "default_avatar")]
    avatar: String,
    #[serde(rename = "bio", default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
}

impl UserSession {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            avatar: default_avatar(),
            bio: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = Some(phone.to_string());
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.bio = Some(bio.to_string());
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        self.avatar = match avatar.is_empty() {
            true => default_avatar(),
            false => avatar.to_string(),
        };
    }

    fn check_valid(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("Name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation("Email is required".into()));
        }
        Ok(())
    }
}

// The logged-in user document lives under its own key, next to (but never
// touched by) the contacts snapshot.
pub struct SessionStore {
    store: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Option<UserSession> {
        match load_document::<UserSession>(&*self.store, SESSION_KEY) {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to read user session: {e}");
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.store.contains(SESSION_KEY).unwrap_or(false)
    }

    pub fn sign_in(&mut self, session: &UserSession) -> Result<()> {
        session.check_valid()?;
        store_document(&mut *self.store, SESSION_KEY, session)?;
        info!("User {} signed in", session.name());
        Ok(())
    }

    pub fn update(&mut self, session: &UserSession) -> Result<()> {
        if !self.is_signed_in() {
            return Err(Error::NotFound("No user is signed in".into()));
        }
        session.check_valid()?;
        store_document(&mut *self.store, SESSION_KEY, session)
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        info!("User signed out");
        Ok(())
    }
}
