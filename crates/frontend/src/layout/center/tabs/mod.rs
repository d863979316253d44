pub mod tab;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::logging::log;
use leptos::prelude::*;
use tab::Tab as TabComponent;

/// Полоса табов и контент открытых табов.
///
/// Неактивные табы не размонтируются, а скрываются, поэтому состояние
/// списков и форм сохраняется при переключении.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                    fallback=|| view! {
                        <div class="tabs__empty">"Sélectionnez une rubrique dans le menu"</div>
                    }
                >
                    <For
                        each=move || {
                            let tabs = tabs_store.opened.get();
                            log!("📋 <For> each triggered. Tabs count: {}", tabs.len());
                            tabs
                        }
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
