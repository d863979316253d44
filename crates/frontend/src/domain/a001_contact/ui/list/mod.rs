use contracts::domain::a001_contact::{Contact, ENTITY};
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a001_contact::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(_: &Contact) -> Vec<RecordAction> {
    vec![RecordAction::View, RecordAction::Edit, RecordAction::Delete]
}

#[component]
pub fn ContactList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Nom", |c: &Contact| c.name.clone()),
        Column::searchable("Société", |c: &Contact| c.company.clone()),
        Column::searchable("E-mail", |c: &Contact| c.email.clone()),
        Column::searchable("Téléphone", |c: &Contact| c.phone.clone()),
        Column::searchable("Ville", |c: &Contact| c.city.clone()),
        Column::text("Type", |c: &Contact| c.kind.label().to_string()),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Contacts"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Nom, société, e-mail, ville..."
            create_action=("a001_contact_new", "Nouveau contact")
        />
    }
}
