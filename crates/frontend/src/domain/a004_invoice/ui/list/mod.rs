use contracts::domain::a004_invoice::{Invoice, InvoiceStatus, ENTITY};
use contracts::shared::format::{format_date, format_money};
use contracts::shared::record_list::RecordAction;
use leptos::prelude::*;

use crate::domain::a004_invoice::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(invoice: &Invoice) -> Vec<RecordAction> {
    let mut actions = vec![RecordAction::View, RecordAction::Download];
    match invoice.status {
        InvoiceStatus::Draft => {
            actions.push(RecordAction::Edit);
            actions.push(RecordAction::Delete);
        }
        InvoiceStatus::Sent | InvoiceStatus::Overdue => actions.push(RecordAction::MarkPaid),
        InvoiceStatus::Paid => actions.push(RecordAction::Archive),
        InvoiceStatus::Cancelled => {}
    }
    actions
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Numéro", |i: &Invoice| i.display_name()),
        Column::searchable("Client", |i: &Invoice| i.customer.clone()),
        Column::searchable("Émise le", |i: &Invoice| format_date(i.issue_date)),
        Column::text("Échéance", |i: &Invoice| format_date(i.due_date)),
        Column::numeric("Montant HT", |i: &Invoice| format_money(i.amount_excl_tax)),
        Column::numeric("Montant TTC", |i: &Invoice| format_money(i.amount_incl_tax())),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Factures"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Numéro, client, date..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_actions_follow_status() {
        let records = sample::records();
        let draft = records.iter().find(|i| i.status == InvoiceStatus::Draft);
        assert!(draft.map(row_actions).is_some_and(|a| a.contains(&RecordAction::Delete)));
        let overdue = records.iter().find(|i| i.status == InvoiceStatus::Overdue);
        assert!(overdue.map(row_actions).is_some_and(|a| a.contains(&RecordAction::MarkPaid)));
        let paid = records.iter().find(|i| i.status == InvoiceStatus::Paid);
        assert!(paid.map(row_actions).is_some_and(|a| !a.contains(&RecordAction::Edit)));
    }
}
