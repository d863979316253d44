pub mod details;
pub mod list;

pub use details::ComplianceItemDetail;
pub use list::ComplianceItemList;
