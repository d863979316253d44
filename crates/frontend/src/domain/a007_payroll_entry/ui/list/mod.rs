use contracts::domain::a007_payroll_entry::{PayrollEntry, PayrollStatus, ENTITY};
use contracts::shared::format::{format_money, format_period};
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a007_payroll_entry::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(entry: &PayrollEntry) -> Vec<RecordAction> {
    match entry.status {
        PayrollStatus::Draft => vec![
            RecordAction::View,
            RecordAction::Edit,
            RecordAction::Delete,
        ],
        PayrollStatus::Validated => vec![
            RecordAction::View,
            RecordAction::Generate,
            RecordAction::MarkPaid,
        ],
        PayrollStatus::Paid => vec![RecordAction::View, RecordAction::Download],
    }
}

#[component]
pub fn PayrollEntryList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Salarié", |e: &PayrollEntry| e.employee.clone()),
        Column::searchable("Période", |e: &PayrollEntry| format_period(e.period)),
        Column::searchable("Service", |e: &PayrollEntry| e.department.label().to_string()),
        Column::numeric("Brut", |e: &PayrollEntry| format_money(e.gross_salary)),
        Column::numeric("Net", |e: &PayrollEntry| format_money(e.net_salary())),
        Column::numeric("Coût employeur", |e: &PayrollEntry| format_money(e.employer_cost())),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Paie"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Salarié, période, service..."
        />
    }
}
