use contracts::domain::a006_compliance_item::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a006_compliance_item::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn ComplianceItemDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|i| i.id == id);

    view! { <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close /> }
}
