use std::borrow::Cow;
use std::fmt::Debug;

use crate::shared::status::StatusBadge;

/// Категориальное поле записи: закрытое перечисление для кнопок фильтра.
pub trait FilterCategory: Copy + Eq + Debug + 'static {
    /// Все значения в порядке отображения кнопок.
    const ALL: &'static [Self];

    /// Стабильный код, хранится в `FilterState`
    fn code(&self) -> &'static str;

    /// Человекочитаемое название
    fn label(&self) -> &'static str;

    /// Парсинг из кода
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Запись, которую умеет показывать `RecordList`.
///
/// Вместо набора замыканий-аксессоров на странице каждая запись сама
/// описывает свой идентификатор, категорию и поля для поиска.
pub trait ListRecord {
    type Category: FilterCategory;
    type Status: StatusBadge;

    /// Уникальный и неизменяемый в пределах коллекции идентификатор
    fn id(&self) -> &str;

    fn category(&self) -> Self::Category;

    fn status(&self) -> Self::Status;

    /// Строковые представления полей, по которым работает поиск.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Заголовок записи для вкладки деталей
    fn title(&self) -> String;

    /// Пары (подпись, значение) для панели деталей.
    fn detail_fields(&self) -> Vec<(&'static str, String)>;

    /// Проверяет поисковый запрос, уже приведённый к нижнему регистру.
    fn matches_search(&self, needle_lower: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}
