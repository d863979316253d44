pub mod dto;

pub use dto::{Invoice, InvoiceStatus};

pub const ENTITY: &str = "a004_invoice";
