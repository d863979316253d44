use contracts::domain::a007_payroll_entry::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a007_payroll_entry::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn PayrollEntryDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|e| e.id == id);

    view! { <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close /> }
}
