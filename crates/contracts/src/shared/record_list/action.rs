use serde::{Deserialize, Serialize};

/// Действие над строкой списка. Список сам действие не выполняет,
/// а только передаёт (действие, id) наружу.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordAction {
    View,
    Edit,
    Delete,
    Generate,
    Download,
    Archive,
    MarkPaid,
}

impl RecordAction {
    pub fn code(&self) -> &'static str {
        match self {
            RecordAction::View => "view",
            RecordAction::Edit => "edit",
            RecordAction::Delete => "delete",
            RecordAction::Generate => "generate",
            RecordAction::Download => "download",
            RecordAction::Archive => "archive",
            RecordAction::MarkPaid => "mark-paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordAction::View => "Voir",
            RecordAction::Edit => "Modifier",
            RecordAction::Delete => "Supprimer",
            RecordAction::Generate => "Générer",
            RecordAction::Download => "Télécharger",
            RecordAction::Archive => "Archiver",
            RecordAction::MarkPaid => "Marquer payé",
        }
    }

    /// Разрушающие действия требуют подтверждения
    pub fn is_destructive(&self) -> bool {
        matches!(self, RecordAction::Delete | RecordAction::Archive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: RecordAction,
    pub id: String,
}

/// Результат запроса действия у списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Передать запрос навигации/обработчику страницы
    Dispatch(ActionRequest),
    /// Запрос отложен до `confirm_pending` / `cancel_pending`
    NeedsConfirmation(ActionRequest),
    /// Записи с таким id нет в коллекции
    Ignored,
}
