use unicode_normalization::UnicodeNormalization;

use super::{
    chat_preview::ChatPreview,
    contact::Contact,
    group::Group,
};

pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Contact {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name()]
    }
}

impl Searchable for Group {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name()]
    }
}

impl Searchable for ChatPreview {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.last_message.as_str()]
    }
}

fn fold(input: &str) -> String {
    input.to_lowercase().nfc().collect()
}

// Case-insensitive substring match; an empty term matches everything.
pub fn search<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let term = fold(term);
    items.iter().filter(|item| {
        term.is_empty() || item.search_fields().iter().any(|field| {
            fold(field).contains(&term)
        })
    }).collect()
}

pub fn online_only<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&'a Contact> {
    contacts.into_iter().filter(|c| c.is_online()).collect()
}

pub fn unread_only<'a>(chats: impl IntoIterator<Item = &'a ChatPreview>) -> Vec<&'a ChatPreview> {
    chats.into_iter().filter(|c| c.has_unread()).collect()
}

pub fn groups_only<'a>(chats: impl IntoIterator<Item = &'a ChatPreview>) -> Vec<&'a ChatPreview> {
    chats.into_iter().filter(|c| c.is_group).collect()
}
