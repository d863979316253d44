use contracts::domain::a004_invoice::ENTITY;
use contracts::shared::format::format_money;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a004_invoice::sample;
use crate::shared::components::record_detail::RecordDetail;

#[component]
pub fn InvoiceDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|i| i.id == id);
    let totals = record
        .as_ref()
        .map(|i| (i.amount_excl_tax, i.vat_amount(), i.amount_incl_tax()));

    view! {
        <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close>
            {totals.map(|(excl, vat, incl)| view! {
                <table class="table__data invoice-totals">
                    <tbody>
                        <tr>
                            <td class="table__cell">"Total HT"</td>
                            <td class="table__cell table__cell--numeric">{format_money(excl)}</td>
                        </tr>
                        <tr>
                            <td class="table__cell">"TVA"</td>
                            <td class="table__cell table__cell--numeric">{format_money(vat)}</td>
                        </tr>
                        <tr class="table__totals-row">
                            <td class="table__cell">"Total TTC"</td>
                            <td class="table__cell table__cell--numeric">{format_money(incl)}</td>
                        </tr>
                    </tbody>
                </table>
            })}
        </RecordDetail>
    }
}
