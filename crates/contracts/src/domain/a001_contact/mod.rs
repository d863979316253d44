pub mod dto;
pub mod form;

pub use dto::{Contact, ContactKind, ContactStatus};
pub use form::ContactDraft;

pub const ENTITY: &str = "a001_contact";
