pub mod dto;

pub use dto::{Contract, ContractKind, ContractStatus};

pub const ENTITY: &str = "a002_contract";
