use std::collections::HashSet;

use super::action::{ActionOutcome, ActionRequest, RecordAction};
use super::error::RecordListError;
use super::expansion::ExpansionState;
use super::filter::FilterState;
use super::record::{FilterCategory, ListRecord};

/// Состояние страницы-списка: коллекция, фильтр, раскрытая строка
/// и ожидающее подтверждения действие.
///
/// Коллекция после создания не меняется: фильтрация и раскрытие
/// только вычисляют представление.
#[derive(Debug, Clone)]
pub struct RecordList<R> {
    records: Vec<R>,
    filter: FilterState,
    expansion: ExpansionState,
    pending: Option<ActionRequest>,
}

impl<R: ListRecord> RecordList<R> {
    /// Принимает коллекцию, отклоняя пустые и повторяющиеся идентификаторы.
    pub fn try_new(records: Vec<R>) -> Result<Self, RecordListError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let id = record.id();
            if id.trim().is_empty() {
                log::warn!("record list rejected: empty id at position {index}");
                return Err(RecordListError::EmptyId { index });
            }
            if !seen.insert(id) {
                log::warn!("record list rejected: duplicate id '{id}'");
                return Err(RecordListError::DuplicateId { id: id.to_string() });
            }
        }
        log::debug!("record list created with {} records", records.len());
        Ok(Self {
            records,
            filter: FilterState::default(),
            expansion: ExpansionState::default(),
            pending: None,
        })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    // ------------------------------------------------------------------
    // Фильтр
    // ------------------------------------------------------------------

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
        log::trace!("search query set to '{}'", self.filter.search);
    }

    /// Переключает код категории. Неизвестный код просто не совпадёт ни с одной записью.
    pub fn toggle_category(&mut self, value: &str) {
        let selected = self.filter.toggle_category(value);
        log::trace!("category '{value}' selected={selected}");
    }

    pub fn toggle(&mut self, category: R::Category) {
        self.toggle_category(category.code());
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn active_filters_count(&self) -> usize {
        self.filter.active_count()
    }

    /// Видимые записи в порядке исходной коллекции.
    pub fn visible_records(&self) -> Vec<&R> {
        let needle = self.filter.search_needle();
        self.records
            .iter()
            .filter(|r| self.filter.matches_with_needle(*r, needle.as_deref()))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_records().len()
    }

    /// Количество записей по каждой категории во всей коллекции,
    /// в порядке `FilterCategory::ALL`.
    pub fn category_counts(&self) -> Vec<(R::Category, usize)> {
        R::Category::ALL
            .iter()
            .map(|category| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| r.category() == *category)
                    .count();
                (*category, count)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Раскрытие строк
    // ------------------------------------------------------------------

    pub fn toggle_expand(&mut self, id: &str) {
        self.expansion.toggle(id);
        log::trace!("expansion: {:?}", self.expansion);
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    // ------------------------------------------------------------------
    // Действия
    // ------------------------------------------------------------------

    /// Разрушающие действия откладываются до подтверждения, остальные
    /// сразу уходят обработчику. Новый запрос заменяет ожидающий.
    pub fn request_action(&mut self, action: RecordAction, id: &str) -> ActionOutcome {
        if self.find(id).is_none() {
            log::debug!("action {} ignored: unknown id '{id}'", action.code());
            return ActionOutcome::Ignored;
        }
        let request = ActionRequest {
            action,
            id: id.to_string(),
        };
        if action.is_destructive() {
            self.pending = Some(request.clone());
            ActionOutcome::NeedsConfirmation(request)
        } else {
            ActionOutcome::Dispatch(request)
        }
    }

    pub fn pending_action(&self) -> Option<&ActionRequest> {
        self.pending.as_ref()
    }

    pub fn confirm_pending(&mut self) -> Option<ActionRequest> {
        self.pending.take()
    }

    pub fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            log::debug!("action {} on '{}' cancelled", request.action.code(), request.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::shared::status::{BadgeTone, StatusBadge};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Alpha,
        Beta,
    }

    impl FilterCategory for Kind {
        const ALL: &'static [Self] = &[Kind::Alpha, Kind::Beta];

        fn code(&self) -> &'static str {
            match self {
                Kind::Alpha => "alpha",
                Kind::Beta => "beta",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Kind::Alpha => "Alpha",
                Kind::Beta => "Beta",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Open;

    impl StatusBadge for Open {
        fn label(&self) -> &'static str {
            "open"
        }

        fn tone(&self) -> BadgeTone {
            BadgeTone::Neutral
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
        kind: Kind,
    }

    impl ListRecord for Item {
        type Category = Kind;
        type Status = Open;

        fn id(&self) -> &str {
            &self.id
        }

        fn category(&self) -> Kind {
            self.kind
        }

        fn status(&self) -> Open {
            Open
        }

        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(&self.name)]
        }

        fn title(&self) -> String {
            self.name.clone()
        }

        fn detail_fields(&self) -> Vec<(&'static str, String)> {
            vec![("Nom", self.name.clone())]
        }
    }

    fn item(id: &str, name: &str, kind: Kind) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        }
    }

    fn sample() -> RecordList<Item> {
        RecordList::try_new(vec![
            item("1", "Paris Nord", Kind::Alpha),
            item("2", "Lyon", Kind::Beta),
            item("3", "Paris Sud", Kind::Beta),
        ])
        .unwrap()
    }

    fn ids(list: &RecordList<Item>) -> Vec<&str> {
        list.visible_records().iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_try_new_rejects_duplicates_and_empty_ids() {
        let duplicate = RecordList::try_new(vec![
            item("1", "a", Kind::Alpha),
            item("1", "b", Kind::Beta),
        ]);
        assert_eq!(
            duplicate.unwrap_err(),
            RecordListError::DuplicateId {
                id: "1".to_string()
            }
        );

        let empty = RecordList::try_new(vec![item("1", "a", Kind::Alpha), item(" ", "b", Kind::Beta)]);
        assert_eq!(empty.unwrap_err(), RecordListError::EmptyId { index: 1 });
    }

    #[test]
    fn test_search_and_category_intersect() {
        let mut list = sample();
        list.set_search_query("PARIS");
        assert_eq!(ids(&list), vec!["1", "3"]);

        list.toggle(Kind::Beta);
        assert_eq!(ids(&list), vec!["3"]);

        list.set_search_query("");
        assert_eq!(ids(&list), vec!["2", "3"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let mut list = sample();
        list.toggle_category("gamma");
        assert!(list.visible_records().is_empty());
        list.toggle_category("gamma");
        assert_eq!(list.visible_count(), 3);
    }

    #[test]
    fn test_filter_does_not_touch_expansion() {
        let mut list = sample();
        list.toggle_expand("2");
        list.set_search_query("paris");
        list.toggle(Kind::Alpha);
        assert!(list.is_expanded("2"));
        list.clear_filters();
        assert_eq!(list.expansion(), &ExpansionState::Expanded("2".to_string()));
    }

    #[test]
    fn test_category_counts_cover_whole_collection() {
        let mut list = sample();
        list.set_search_query("lyon");
        assert_eq!(list.category_counts(), vec![(Kind::Alpha, 1), (Kind::Beta, 2)]);
    }

    #[test]
    fn test_destructive_actions_wait_for_confirmation() {
        let mut list = sample();

        let outcome = list.request_action(RecordAction::View, "1");
        assert_eq!(
            outcome,
            ActionOutcome::Dispatch(ActionRequest {
                action: RecordAction::View,
                id: "1".to_string()
            })
        );
        assert!(list.pending_action().is_none());

        let outcome = list.request_action(RecordAction::Delete, "2");
        assert!(matches!(outcome, ActionOutcome::NeedsConfirmation(_)));
        assert_eq!(list.pending_action().map(|r| r.id.as_str()), Some("2"));

        list.cancel_pending();
        assert!(list.pending_action().is_none());

        list.request_action(RecordAction::Archive, "3");
        let confirmed = list.confirm_pending().unwrap();
        assert_eq!(confirmed.action, RecordAction::Archive);
        assert_eq!(confirmed.id, "3");
        assert!(list.confirm_pending().is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut list = sample();
        assert_eq!(list.request_action(RecordAction::Delete, "42"), ActionOutcome::Ignored);
        assert!(list.pending_action().is_none());
    }
}
