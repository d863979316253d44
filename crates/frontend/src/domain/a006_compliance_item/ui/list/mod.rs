use contracts::domain::a006_compliance_item::{ComplianceItem, ENTITY};
use contracts::shared::format::format_date;
use contracts::shared::record_list::RecordAction;
use leptos::prelude::*;

use crate::domain::a006_compliance_item::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(item: &ComplianceItem) -> Vec<RecordAction> {
    if item.is_open() {
        vec![RecordAction::View, RecordAction::Edit]
    } else {
        vec![RecordAction::View, RecordAction::Archive]
    }
}

#[component]
pub fn ComplianceItemList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Obligation", |i: &ComplianceItem| i.title.clone()),
        Column::searchable("Organisme", |i: &ComplianceItem| i.authority.clone()),
        Column::searchable("Responsable", |i: &ComplianceItem| i.owner.clone()),
        Column::text("Échéance", |i: &ComplianceItem| format_date(i.deadline)),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Conformité"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Obligation, organisme, responsable..."
        />
    }
}
