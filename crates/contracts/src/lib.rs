//! Общие типы фронтенда: записи доменов, состояние списков, валидация форм.
//!
//! Крейт не зависит от wasm и тестируется нативно.

pub mod domain;
pub mod shared;
