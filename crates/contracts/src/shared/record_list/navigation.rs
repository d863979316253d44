//! Намерения навигации: какой таб открыть в ответ на действие над строкой.
//!
//! Формат ключа таба: `{entity}_detail_{id}` или `{entity}_edit_{id}`,
//! например `a004_invoice_detail_3`.

use serde::{Deserialize, Serialize};

use super::action::{ActionRequest, RecordAction};

const DETAIL_MARKER: &str = "_detail_";
const EDIT_MARKER: &str = "_edit_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabMode {
    View,
    Edit,
}

/// Таб, который должен открыть роутер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub tab_key: String,
    pub title: String,
}

impl NavigationIntent {
    /// Только просмотр и редактирование ведут на другую страницу;
    /// остальные действия навигации не порождают.
    pub fn for_action(entity: &str, request: &ActionRequest, title: &str) -> Option<Self> {
        let (marker, prefix) = match request.action {
            RecordAction::View => (DETAIL_MARKER, ""),
            RecordAction::Edit => (EDIT_MARKER, "Modifier : "),
            RecordAction::Delete
            | RecordAction::Generate
            | RecordAction::Download
            | RecordAction::Archive
            | RecordAction::MarkPaid => return None,
        };
        Some(Self {
            tab_key: format!("{entity}{marker}{}", request.id),
            title: format!("{prefix}{title}"),
        })
    }
}

/// Разобранный ключ таба записи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTabKey<'a> {
    pub entity: &'a str,
    pub mode: TabMode,
    pub id: &'a str,
}

pub fn parse_record_tab_key(key: &str) -> Option<RecordTabKey<'_>> {
    let detail = key.find(DETAIL_MARKER).map(|pos| (pos, DETAIL_MARKER, TabMode::View));
    let edit = key.find(EDIT_MARKER).map(|pos| (pos, EDIT_MARKER, TabMode::Edit));
    let (pos, marker, mode) = match (detail, edit) {
        (Some(d), Some(e)) => {
            if d.0 <= e.0 {
                d
            } else {
                e
            }
        }
        (Some(d), None) => d,
        (None, Some(e)) => e,
        (None, None) => return None,
    };
    let entity = &key[..pos];
    let id = &key[pos + marker.len()..];
    if entity.is_empty() || id.is_empty() {
        return None;
    }
    Some(RecordTabKey { entity, mode, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(action: RecordAction, id: &str) -> ActionRequest {
        ActionRequest {
            action,
            id: id.to_string(),
        }
    }

    #[test]
    fn test_view_and_edit_navigate() {
        let view = NavigationIntent::for_action(
            "a004_invoice",
            &request(RecordAction::View, "3"),
            "Facture #2024-003",
        )
        .unwrap();
        assert_eq!(view.tab_key, "a004_invoice_detail_3");
        assert_eq!(view.title, "Facture #2024-003");

        let edit = NavigationIntent::for_action(
            "a004_invoice",
            &request(RecordAction::Edit, "3"),
            "Facture #2024-003",
        )
        .unwrap();
        assert_eq!(edit.tab_key, "a004_invoice_edit_3");
        assert_eq!(edit.title, "Modifier : Facture #2024-003");
    }

    #[test]
    fn test_stub_actions_do_not_navigate() {
        for action in [
            RecordAction::Delete,
            RecordAction::Generate,
            RecordAction::Download,
            RecordAction::Archive,
            RecordAction::MarkPaid,
        ] {
            assert_eq!(
                NavigationIntent::for_action("a004_invoice", &request(action, "1"), "x"),
                None
            );
        }
    }

    #[test]
    fn test_parse_record_tab_key() {
        assert_eq!(
            parse_record_tab_key("a004_invoice_detail_3"),
            Some(RecordTabKey {
                entity: "a004_invoice",
                mode: TabMode::View,
                id: "3"
            })
        );
        assert_eq!(
            parse_record_tab_key("a001_contact_edit_c-12"),
            Some(RecordTabKey {
                entity: "a001_contact",
                mode: TabMode::Edit,
                id: "c-12"
            })
        );
        assert_eq!(parse_record_tab_key("a004_invoice"), None);
        assert_eq!(parse_record_tab_key("a004_invoice_detail_"), None);
    }
}
