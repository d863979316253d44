//! Настройки приложения из query-строки адреса страницы.
//!
//! `?log=debug&debounce=500&active=a004_invoice`: все параметры необязательны,
//! некорректное значение заменяется значением по умолчанию.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;
pub const MAX_DEBOUNCE_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: log::Level,
    pub search_debounce_ms: u32,
    /// Таб, открытый при старте
    pub active_tab: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            active_tab: None,
        }
    }
}

/// Сырые параметры: всё строками, чтобы одна ошибка не ломала остальные
#[derive(Debug, Default, Deserialize)]
struct RawQuery {
    log: Option<String>,
    debounce: Option<String>,
    active: Option<String>,
}

impl AppConfig {
    /// Разбор `location.search` (ведущий `?` допускается).
    pub fn from_query(search: &str) -> Self {
        let query = search.trim_start_matches('?');
        let raw: RawQuery = match serde_qs::from_str(query) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("config: unreadable query '{query}': {e}");
                RawQuery::default()
            }
        };
        let defaults = Self::default();

        let log_level = raw
            .log
            .as_deref()
            .and_then(|v| v.parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        let search_debounce_ms = raw
            .debounce
            .as_deref()
            .and_then(|v| v.parse::<u32>().ok())
            .map(|v| v.min(MAX_DEBOUNCE_MS))
            .unwrap_or(defaults.search_debounce_ms);

        let active_tab = raw.active.filter(|v| !v.trim().is_empty());

        Self {
            log_level,
            search_debounce_ms,
            active_tab,
        }
    }

    /// Query-строка для синхронизации адреса с активным табом.
    /// Параметры со значением по умолчанию не пишутся.
    pub fn to_query(&self, active_key: &str) -> String {
        let defaults = Self::default();
        let out = QueryOut {
            log: (self.log_level != defaults.log_level)
                .then(|| self.log_level.as_str().to_lowercase()),
            debounce: (self.search_debounce_ms != defaults.search_debounce_ms)
                .then_some(self.search_debounce_ms),
            active: active_key,
        };
        serde_qs::to_string(&out).unwrap_or_else(|e| {
            log::warn!("config: cannot serialize query: {e}");
            String::new()
        })
    }
}

#[derive(Serialize)]
struct QueryOut<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debounce: Option<u32>,
    active: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?"), AppConfig::default());
    }

    #[test]
    fn test_full_query() {
        let cfg = AppConfig::from_query("?log=debug&debounce=500&active=a004_invoice");
        assert_eq!(cfg.log_level, log::Level::Debug);
        assert_eq!(cfg.search_debounce_ms, 500);
        assert_eq!(cfg.active_tab.as_deref(), Some("a004_invoice"));
    }

    #[test]
    fn test_invalid_values_fall_back_independently() {
        let cfg = AppConfig::from_query("log=loud&debounce=50000");
        assert_eq!(cfg.log_level, log::Level::Info);
        assert_eq!(cfg.search_debounce_ms, MAX_DEBOUNCE_MS);

        let cfg = AppConfig::from_query("log=trace&debounce=-1");
        assert_eq!(cfg.log_level, log::Level::Trace);
        assert_eq!(cfg.search_debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_to_query_keeps_non_default_settings() {
        assert_eq!(
            AppConfig::default().to_query("a004_invoice_detail_3"),
            "active=a004_invoice_detail_3"
        );

        let cfg = AppConfig::from_query("log=debug&debounce=500");
        assert_eq!(cfg.to_query("a001_contact"), "log=debug&debounce=500&active=a001_contact");
    }
}
