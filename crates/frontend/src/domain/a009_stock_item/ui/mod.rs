pub mod details;
pub mod list;

pub use details::StockItemDetail;
pub use list::StockItemList;
