pub mod details;
pub mod list;

pub use details::CostCenterDetail;
pub use list::CostCenterList;
