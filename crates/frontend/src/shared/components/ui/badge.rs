use contracts::shared::status::{BadgeTone, StatusBadge as StatusBadgeTrait};
use leptos::prelude::*;

/// Badge component with different tones
#[component]
pub fn Badge(
    /// Tone, `Neutral` by default
    #[prop(optional)]
    tone: Option<BadgeTone>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let tone_class = tone.unwrap_or(BadgeTone::Neutral).css_class();

    view! {
        <span class=format!("badge {}", tone_class)>
            {children()}
        </span>
    }
}

/// Бейдж статуса записи: подпись и цвет берутся из самого статуса
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusBadgeTrait + Send + 'static,
{
    view! {
        <Badge tone=status.tone()>
            {status.label()}
        </Badge>
    }
}
