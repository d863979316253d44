pub mod details;
pub mod list;

pub use details::WorkScheduleDetail;
pub use list::WorkScheduleList;
