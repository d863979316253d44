use thiserror::Error;

/// Коллекция нарушает предусловия списка и отклоняется при загрузке.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordListError {
    #[error("record at position {index} has an empty identifier")]
    EmptyId { index: usize },

    #[error("duplicate record identifier '{id}'")]
    DuplicateId { id: String },
}
