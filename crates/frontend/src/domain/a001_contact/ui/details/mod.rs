use contracts::domain::a001_contact::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a001_contact::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn ContactDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|c| c.id == id);

    view! { <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close /> }
}
