use crate::shared::icons::{icon, Icon};
use contracts::shared::status::BadgeTone;
use leptos::prelude::*;

fn tone_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "stat-card stat-card--success",
        BadgeTone::Error => "stat-card stat-card--error",
        BadgeTone::Warning => "stat-card stat-card--warning",
        BadgeTone::Primary => "stat-card stat-card--primary",
        BadgeTone::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    icon_name: Icon,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Visual status
    #[prop(into)]
    tone: Signal<BadgeTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Tab to open on click
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div
            class=move || tone_class(tone.get())
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class(BadgeTone::Neutral), "stat-card");
        assert_eq!(tone_class(BadgeTone::Error), "stat-card stat-card--error");
    }
}
