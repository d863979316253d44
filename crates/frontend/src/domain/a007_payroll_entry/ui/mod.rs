pub mod details;
pub mod list;

pub use details::PayrollEntryDetail;
pub use list::PayrollEntryList;
