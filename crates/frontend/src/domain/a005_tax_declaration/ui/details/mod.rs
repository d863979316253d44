use contracts::domain::a005_tax_declaration::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a005_tax_declaration::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn TaxDeclarationDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|d| d.id == id);
    let rate = record.as_ref().map(|d| d.kind.default_rate());

    view! {
        <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close>
            {rate.map(|rate| view! {
                <p class="detail__hint">{format!("Taux appliqué : {} %", rate)}</p>
            })}
        </RecordDetail>
    }
}
