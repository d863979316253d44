/// Утилиты для списков: подсветка совпадений и поле поиска с debounce
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::{icon, Icon};

/// Разбивает текст на куски, помечая совпадения с запросом (без учёта регистра).
///
/// Запрос сравнивается как есть, с пробелами; пустой запрос даёт один кусок без подсветки.
pub fn split_highlight<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i + needle.len() <= chars.len() {
        let is_match = needle
            .iter()
            .enumerate()
            .all(|(j, n)| chars_eq(chars[i + j].1, *n));
        if is_match {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            if start > plain_start {
                parts.push((&text[plain_start..start], false));
            }
            parts.push((&text[start..end], true));
            plain_start = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }

    if plain_start < text.len() {
        parts.push((&text[plain_start..], false));
    }
    parts
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = split_highlight(text, query)
        .into_iter()
        .map(|(chunk, matched)| {
            let chunk = chunk.to_string();
            if matched {
                view! { <mark class="search-highlight">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Применённое значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка перед применением, мс
    debounce_ms: u32,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Rechercher...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Таймер не Send, храним локально; замена таймера отменяет предыдущий
    let pending = StoredValue::new_local(None::<Timeout>);

    // Фильтр сброшен снаружи (тег, "очистить всё") - очищаем поле
    Effect::new(move |_| {
        if value.get().is_empty() && !input_value.get_untracked().is_empty() {
            pending.set_value(None);
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        if debounce_ms == 0 {
            pending.set_value(None);
            on_change.run(new_value);
            return;
        }
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Effacer">
                    {icon(Icon::Close)}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_highlight_marks_matches() {
        assert_eq!(
            split_highlight("Facture #2024-001", "2024"),
            vec![("Facture #", false), ("2024", true), ("-001", false)]
        );
    }

    #[test]
    fn test_split_highlight_ignores_case_and_keeps_spaces() {
        assert_eq!(
            split_highlight("Paris Nord", "paris "),
            vec![("Paris ", true), ("Nord", false)]
        );
        assert_eq!(split_highlight("Paris Nord", "Nord "), vec![("Paris Nord", false)]);
        assert_eq!(
            split_highlight("Élodie ÉTIENNE", "é"),
            vec![("É", true), ("lodie ", false), ("É", true), ("TIENNE", false)]
        );
    }

    #[test]
    fn test_split_highlight_without_match_or_query() {
        assert_eq!(split_highlight("Lyon", "xyz"), vec![("Lyon", false)]);
        assert_eq!(split_highlight("Lyon", ""), vec![("Lyon", false)]);
        assert_eq!(split_highlight("Lyon", " "), vec![("Lyon", false)]);
        assert_eq!(split_highlight("abab", "AB"), vec![("ab", true), ("ab", true)]);
    }
}
