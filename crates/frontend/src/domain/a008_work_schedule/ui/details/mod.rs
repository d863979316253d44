use contracts::domain::a008_work_schedule::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a008_work_schedule::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn WorkScheduleDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|s| s.id == id);

    view! { <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close /> }
}
