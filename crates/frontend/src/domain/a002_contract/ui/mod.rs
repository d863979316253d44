pub mod details;
pub mod list;

pub use details::ContractDetail;
pub use list::ContractList;
