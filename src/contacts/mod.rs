pub mod chat_preview;
pub mod contact;
pub mod group;
pub mod registry;
pub mod registry_listener;
pub mod search;

pub use chat_preview::ChatPreview;
pub use contact::{Contact, ContactBuilder, ContactStatus, DEFAULT_AVATAR};
pub use group::Group;
pub use registry::{ContactRegistry, RegistryBuilder};
pub use registry_listener::RegistryListener;
