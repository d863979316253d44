pub mod dto;

pub use dto::{Department, PayrollEntry, PayrollStatus};

pub const ENTITY: &str = "a007_payroll_entry";
