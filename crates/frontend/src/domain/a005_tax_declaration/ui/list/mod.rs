use contracts::domain::a005_tax_declaration::{DeclarationStatus, TaxDeclaration, ENTITY};
use contracts::shared::format::{format_date, format_money, format_period};
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a005_tax_declaration::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(declaration: &TaxDeclaration) -> Vec<RecordAction> {
    match declaration.status {
        DeclarationStatus::Draft => vec![
            RecordAction::View,
            RecordAction::Edit,
            RecordAction::Generate,
            RecordAction::Delete,
        ],
        DeclarationStatus::Submitted | DeclarationStatus::Rejected => {
            vec![RecordAction::View, RecordAction::Download]
        }
        DeclarationStatus::Accepted => vec![
            RecordAction::View,
            RecordAction::Download,
            RecordAction::Archive,
        ],
    }
}

#[component]
pub fn TaxDeclarationList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Référence", |d: &TaxDeclaration| d.reference.clone()),
        Column::searchable("Type", |d: &TaxDeclaration| d.kind.label().to_string()),
        Column::searchable("Période", |d: &TaxDeclaration| format_period(d.period_start)),
        Column::text("Date limite", |d: &TaxDeclaration| format_date(d.due_date)),
        Column::numeric("Base", |d: &TaxDeclaration| format_money(d.taxable_base)),
        Column::numeric("Montant dû", |d: &TaxDeclaration| format_money(d.tax_due)),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Déclarations fiscales"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Référence, type, période..."
            create_action=("a005_tax_declaration_new", "Nouvelle déclaration")
        />
    }
}
