pub mod details;
pub mod form;
pub mod list;

pub use details::ContactDetail;
pub use form::ContactCreateForm;
pub use list::ContactList;
