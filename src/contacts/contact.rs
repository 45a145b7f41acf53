use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    Error,
    error::Result,
    is_none_or_empty,
};

pub const DEFAULT_AVATAR: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Online,
    #[default]
    #[serde(other)]
    Offline,
}

impl ContactStatus {
    pub fn is_online(&self) -> bool {
        self == &ContactStatus::Online
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactStatus::Online   => write!(f, "online"),
            ContactStatus::Offline  => write!(f, "offline"),
        }
    }
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(deserializer)?;
    Ok(v.filter(|s| !s.is_empty()))
}

fn non_empty(input: &str) -> Option<String> {
    match input.is_empty() {
        true => None,
        false => Some(input.to_string()),
    }
}

pub(crate) fn check_contact(name: &str, phone: &Option<String>, email: &Option<String>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("Name is required".into()));
    }
    if is_none_or_empty(phone) && is_none_or_empty(email) {
        return Err(Error::Validation("Phone number or email is required".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct ContactBuilder {
    id          : Option<String>,
    name        : Option<String>,
    phone       : Option<String>,
    email       : Option<String>,
    avatar      : Option<String>,
    status      : ContactStatus,
}

impl ContactBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(&mut self, id: &str) -> &mut Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = non_empty(phone);
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = non_empty(email);
        self
    }

    pub fn with_avatar(&mut self, avatar: &str) -> &mut Self {
        self.avatar = non_empty(avatar);
        self
    }

    pub fn with_status(&mut self, status: ContactStatus) -> &mut Self {
        self.status = status;
        self
    }

    pub fn check_valid(&self) -> Result<()> {
        check_contact(
            self.name.as_deref().unwrap_or_default(),
            &self.phone,
            &self.email
        )
    }

    pub fn build(&self) -> Result<Contact> {
        let Some(id) = self.id.as_ref().filter(|v| !v.is_empty()) else {
            return Err(Error::Argument("Missing contact id".into()));
        };
        self.check_valid()?;

        Ok(Contact {
            id      : id.clone(),
            name    : self.name.clone().unwrap_or_default(),
            phone   : self.phone.clone(),
            email   : self.email.clone(),
            avatar  : self.avatar.clone().unwrap_or_else(default_avatar),
            status  : self.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id:     String,

    #[serde(rename = "name")]
    name:   String,

    #[serde(rename = "phone", default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    phone:  Option<String>,

    #[serde(rename = "email", default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    email:  Option<String>,

    #[serde(rename = "avatar", default = "default_avatar")]
    avatar: String,

    #[serde(rename = "status", default)]
    status: ContactStatus,
}

impl Contact {
    // Seed records skip validation: the built-in samples carry no phone or email.
    pub(crate) fn sample(id: &str, name: &str, status: ContactStatus) -> Self {
        Self {
            id:     id.to_string(),
            name:   name.to_string(),
            phone:  None,
            email:  None,
            avatar: default_avatar(),
            status,
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

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = non_empty(phone);
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = non_empty(email);
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        self.avatar = non_empty(avatar).unwrap_or_else(default_avatar);
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ContactStatus) {
        self.status = status;
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }

    pub fn check_valid(&self) -> Result<()> {
        check_contact(&self.name, &self.phone, &self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.id, self.name, self.status)?;
        if let Some(phone) = self.phone.as_ref() {
            write!(f, ", phone:{}", phone)?;
        }
        if let Some(email) = self.email.as_ref() {
            write!(f, ", email:{}", email)?;
        }
        Ok(())
    }
}

pub(crate) fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::sample("1", "Sarah Johnson",   ContactStatus::Online),
        Contact::sample("2", "David Wilson",    ContactStatus::Offline),
        Contact::sample("3", "Alex Chen",       ContactStatus::Online),
        Contact::sample("4", "Michael Brown",   ContactStatus::Offline),
        Contact::sample("5", "Emily Davis",     ContactStatus::Online),
    ]
}
