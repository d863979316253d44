use contracts::domain::a002_contract::{Contract, ContractStatus, ENTITY};
use contracts::shared::format::{format_date, format_money};
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a002_contract::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(contract: &Contract) -> Vec<RecordAction> {
    let mut actions = vec![
        RecordAction::View,
        RecordAction::Edit,
        RecordAction::Download,
    ];
    if contract.status != ContractStatus::Draft {
        actions.push(RecordAction::Archive);
    }
    actions
}

#[component]
pub fn ContractList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Référence", |c: &Contract| c.reference.clone()),
        Column::searchable("Objet", |c: &Contract| c.title.clone()),
        Column::searchable("Cocontractant", |c: &Contract| c.counterparty.clone()),
        Column::text("Type", |c: &Contract| c.kind.label().to_string()),
        Column::text("Début", |c: &Contract| format_date(c.start_date)),
        Column::text("Fin", |c: &Contract| {
            c.end_date.map(format_date).unwrap_or_else(|| "-".to_string())
        }),
        Column::numeric("Valeur annuelle", |c: &Contract| format_money(c.annual_value)),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Contrats"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Référence, objet, cocontractant..."
        />
    }
}
