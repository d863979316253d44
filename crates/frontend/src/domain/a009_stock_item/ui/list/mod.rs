use contracts::domain::a009_stock_item::{StockItem, ENTITY};
use contracts::shared::format::{format_money, format_number_int};
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a009_stock_item::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(_: &StockItem) -> Vec<RecordAction> {
    vec![RecordAction::View, RecordAction::Edit, RecordAction::Archive]
}

#[component]
pub fn StockItemList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Référence", |s: &StockItem| s.sku.clone()),
        Column::searchable("Article", |s: &StockItem| s.name.clone()),
        Column::searchable("Emplacement", |s: &StockItem| s.location.clone()),
        Column::text("Catégorie", |s: &StockItem| s.category.label().to_string()),
        Column::numeric("Quantité", |s: &StockItem| format_number_int(s.quantity as f64)),
        Column::numeric("Valeur", |s: &StockItem| format_money(s.stock_value())),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Stocks"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Référence, article, emplacement..."
        />
    }
}
