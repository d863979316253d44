//! Универсальный список записей: поиск, фильтр по категориям, раскрытие строки,
//! делегирование действий над строкой.
//!
//! Каждая страница-список держит свой `RecordList<R>` и только рисует его;
//! предикаты фильтрации живут здесь, а не в компонентах.

mod action;
mod error;
mod expansion;
mod filter;
mod list;
mod navigation;
mod record;

pub use action::{ActionOutcome, ActionRequest, RecordAction};
pub use error::RecordListError;
pub use expansion::ExpansionState;
pub use filter::FilterState;
pub use list::RecordList;
pub use navigation::{parse_record_tab_key, NavigationIntent, RecordTabKey, TabMode};
pub use record::{FilterCategory, ListRecord};
