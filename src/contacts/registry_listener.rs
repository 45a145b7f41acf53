use crate::Error;
use super::{
    contact::Contact,
    group::Group,
};

pub trait RegistryListener: Send {
    fn on_contact_added(&self, _contact: &Contact) {}
    fn on_contact_updated(&self, _contact: &Contact) {}
    fn on_contact_deleted(&self, _contact: &Contact) {}
    fn on_group_added(&self, _group: &Group) {}
    fn on_group_deleted(&self, _group: &Group) {}
    fn on_persistence_failed(&self, _error: &Error) {}
}
