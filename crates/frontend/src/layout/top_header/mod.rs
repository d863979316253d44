//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, Icon};
use contracts::shared::format::format_date;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let today = format_date(chrono::Local::now().date_naive());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Back-office"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Masquer la navigation" } else { "Afficher la navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon(Icon::PanelLeftClose)
                    } else {
                        icon(Icon::PanelLeftOpen)
                    }}
                </button>

                <div class="top-header__user">
                    {icon(Icon::Calendar)}
                    <span>{today}</span>
                </div>
            </div>
        </div>
    }
}
