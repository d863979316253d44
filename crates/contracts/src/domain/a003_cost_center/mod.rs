pub mod dto;

pub use dto::{CostCenter, CostCenterKind, CostCenterStatus};

pub const ENTITY: &str = "a003_cost_center";
