use serde::{Deserialize, Serialize};

/// Какая строка списка раскрыта. Одновременно раскрыта не более чем одна.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded(String),
}

impl ExpansionState {
    /// Тот же id сворачивает строку, другой id раскрывает новую вместо текущей.
    pub fn toggle(&mut self, id: &str) {
        *self = match &*self {
            ExpansionState::Expanded(current) if current == id => ExpansionState::Collapsed,
            _ => ExpansionState::Expanded(id.to_string()),
        };
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        matches!(self, ExpansionState::Expanded(current) if current == id)
    }

    pub fn expanded_id(&self) -> Option<&str> {
        match self {
            ExpansionState::Collapsed => None,
            ExpansionState::Expanded(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_transitions() {
        let mut state = ExpansionState::default();
        assert_eq!(state, ExpansionState::Collapsed);

        state.toggle("1");
        assert_eq!(state, ExpansionState::Expanded("1".to_string()));

        state.toggle("2");
        assert_eq!(state, ExpansionState::Expanded("2".to_string()));
        assert!(!state.is_expanded("1"));

        state.toggle("2");
        assert_eq!(state, ExpansionState::Collapsed);
        assert_eq!(state.expanded_id(), None);
    }
}
