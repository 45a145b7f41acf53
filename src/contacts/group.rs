use std::fmt;

use crate::{
    Error,
    error::Result,
};

pub const GROUP_ID_PREFIX: &str = "group-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: String,
    name: String,
    members: Vec<String>,
    avatar: Option<String>,
}

impl Group {
    pub(crate) fn new(id: String, name: &str, members: Vec<String>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation("Group name is required".into()));
        }
        if members.is_empty() {
            return Err(Error::Validation("A group needs at least one member".into()));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            members,
            avatar: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub(crate) fn set_avatar(&mut self, avatar: &str) {
        if avatar.is_empty() {
            self.avatar = None;
            return;
        }
        self.avatar = Some(avatar.to_string());
    }

    // Member ids are weak references; a deleted contact stays listed here.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_member(&self, contact_id: &str) -> bool {
        self.members.iter().any(|v| v == contact_id)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({} members: {})",
            self.id,
            self.name,
            self.members.len(),
            self.members.join(",")
        )
    }
}
