use contracts::shared::config::AppConfig;
use contracts::shared::record_list::{parse_record_tab_key, NavigationIntent};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::{detail_tab_label, entity_element_name, tab_label_for_key};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Черновики форм по ключу таба, переживают закрытие таба
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn search_debounce_ms(&self) -> u32 {
        self.config.with_value(|c| c.search_debounce_ms)
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    pub fn clear_form_state(&self, form_key: &str) {
        self.form_states.update(|states| {
            states.remove(form_key);
        });
    }

    /// Открывает таб из `?active=` и дальше держит адрес в синхроне с активным табом.
    pub fn init_router_integration(&self) {
        if let Some(active_key) = self.config.with_value(|c| c.active_tab.clone()) {
            let title = match tab_label_for_key(&active_key) {
                "" => parse_record_tab_key(&active_key)
                    .map(|k| detail_tab_label(entity_element_name(k.entity), k.id))
                    .unwrap_or_else(|| active_key.clone()),
                label => label.to_string(),
            };
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = this.config.with_value(|c| c.to_query(&active_key));
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| {
                tabs.push(tab);
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            });
        } else {
            leptos::logging::log!("ℹ️ Tab already exists, just activating");
        }
        self.activate_tab(key);
    }

    /// Навигация по действию над строкой списка
    pub fn navigate(&self, intent: &NavigationIntent) {
        self.open_tab(&intent.tab_key, &intent.title);
    }

    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("🔶 activate_tab: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        let changed = self.opened.with_untracked(|tabs| {
            tabs.iter()
                .any(|t| t.key == key && t.title != new_title)
        });
        if !changed {
            return;
        }
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            leptos::logging::log!("➡️ Next active tab: {:?}", next_active);
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
