use serde::{Deserialize, Serialize};

/// Цветовой тон бейджа статуса.
///
/// Фронтенд сопоставляет тон с CSS-модификатором `badge--*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }
}

/// Закрытое перечисление статусов записи с подписью и цветом.
///
/// Каждый статус обязан явно выбрать тон: `match` по варианту вместо
/// поиска по строковому ключу.
pub trait StatusBadge: Copy {
    fn label(&self) -> &'static str;
    fn tone(&self) -> BadgeTone;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_per_tone() {
        assert_eq!(BadgeTone::Primary.css_class(), "badge--primary");
        assert_eq!(BadgeTone::Error.css_class(), "badge--error");
        assert_eq!(BadgeTone::Neutral.css_class(), "badge--neutral");
    }
}
