pub mod config;
pub mod format;
pub mod record_list;
pub mod status;
pub mod validation;
