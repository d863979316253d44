pub mod dto;

pub use dto::{StockCategory, StockItem, StockLevel};

pub const ENTITY: &str = "a009_stock_item";
