pub mod dto;

pub use dto::{ScheduleStatus, ShiftKind, WorkSchedule};

pub const ENTITY: &str = "a008_work_schedule";
