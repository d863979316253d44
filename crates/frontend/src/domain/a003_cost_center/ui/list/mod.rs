use contracts::domain::a003_cost_center::{CostCenter, ENTITY};
use contracts::shared::format::format_money;
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a003_cost_center::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(_: &CostCenter) -> Vec<RecordAction> {
    vec![RecordAction::View, RecordAction::Edit, RecordAction::Archive]
}

#[component]
pub fn CostCenterList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Code", |c: &CostCenter| c.code.clone()),
        Column::searchable("Libellé", |c: &CostCenter| c.name.clone()),
        Column::searchable("Responsable", |c: &CostCenter| c.manager.clone()),
        Column::text("Type", |c: &CostCenter| c.kind.label().to_string()),
        Column::numeric("Budget", |c: &CostCenter| format_money(c.budget)),
        Column::numeric("Consommé", |c: &CostCenter| format_money(c.spent)),
        Column::numeric("%", |c: &CostCenter| format!("{:.0} %", c.consumption_percent())),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Centres de coûts"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Code, libellé, responsable..."
        />
    }
}
