use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::{icon, Icon};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        let key = key.get_value();
        tabs_store.active.with(|active| active.as_deref() == Some(key.as_str()))
    });

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    // Заголовок берём из стора: detail-табы могут его обновить
    let title = move || {
        let key = key.get_value();
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.key.clone()>
            <span>{title}</span>
            <button class="tab-close" on:click=on_close title="Fermer">
                {icon(Icon::Close)}
            </button>
        </div>
    }
}
