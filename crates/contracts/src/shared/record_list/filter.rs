use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::{FilterCategory, ListRecord};

/// Текущий поиск и выбранные категории.
///
/// Пустой набор категорий означает "без фильтра".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub selected_categories: BTreeSet<String>,
}

impl FilterState {
    /// Поисковая строка в нижнем регистре, пробелы значимы.
    /// `None` только для пустой строки.
    pub fn search_needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// Симметричная разность: выбранное значение снимается, невыбранное добавляется.
    /// Возвращает `true`, если значение теперь выбрано.
    pub fn toggle_category(&mut self, value: &str) -> bool {
        if self.selected_categories.remove(value) {
            false
        } else {
            self.selected_categories.insert(value.to_string());
            true
        }
    }

    pub fn is_category_selected(&self, value: &str) -> bool {
        self.selected_categories.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none() && self.selected_categories.is_empty()
    }

    /// Количество активных фильтров для бейджа панели фильтров
    pub fn active_count(&self) -> usize {
        let search = usize::from(self.search_needle().is_some());
        search + self.selected_categories.len()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.selected_categories.clear();
    }

    /// Видимость записи: категория И поиск.
    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        self.matches_with_needle(record, self.search_needle().as_deref())
    }

    pub(crate) fn matches_with_needle<R: ListRecord>(
        &self,
        record: &R,
        needle: Option<&str>,
    ) -> bool {
        let category_ok = self.selected_categories.is_empty()
            || self
                .selected_categories
                .contains(record.category().code());
        if !category_ok {
            return false;
        }
        match needle {
            Some(needle) => record.matches_search(needle),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_category_is_symmetric_difference() {
        let mut state = FilterState::default();
        assert!(state.toggle_category("cost"));
        assert!(state.is_category_selected("cost"));
        assert!(!state.toggle_category("cost"));
        assert!(state.selected_categories.is_empty());
    }

    #[test]
    fn test_search_needle_lowercases_and_keeps_spaces() {
        let mut state = FilterState::default();
        assert_eq!(state.search_needle(), None);
        state.search = "   ".to_string();
        assert_eq!(state.search_needle().as_deref(), Some("   "));
        state.search = "  Facture ".to_string();
        assert_eq!(state.search_needle().as_deref(), Some("  facture "));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_active_count() {
        let mut state = FilterState::default();
        assert_eq!(state.active_count(), 0);
        state.search = "abc".to_string();
        state.toggle_category("a");
        state.toggle_category("b");
        assert_eq!(state.active_count(), 3);
        state.clear();
        assert!(state.is_empty());
    }
}
