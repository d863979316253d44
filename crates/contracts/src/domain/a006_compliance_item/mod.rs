pub mod dto;

pub use dto::{ComplianceArea, ComplianceItem, ComplianceStatus};

pub const ENTITY: &str = "a006_compliance_item";
