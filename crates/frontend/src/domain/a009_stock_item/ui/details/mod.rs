use contracts::domain::a009_stock_item::{StockLevel, ENTITY};
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a009_stock_item::sample;
use crate::shared::components::record_detail::RecordDetail;
use crate::shared::icons::{icon, Icon};

/// Подсказка по пополнению: сколько докупить до точки перезаказа
fn restock_hint(level: StockLevel, quantity: u32, reorder_point: u32) -> Option<String> {
    match level {
        StockLevel::InStock => None,
        StockLevel::Low | StockLevel::OutOfStock => Some(format!(
            "Réapprovisionner : au moins {} unité(s) pour dépasser le seuil.",
            (reorder_point + 1).saturating_sub(quantity)
        )),
    }
}

#[component]
pub fn StockItemDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|s| s.id == id);
    let hint = record
        .as_ref()
        .and_then(|s| restock_hint(s.level(), s.quantity, s.reorder_point));

    view! {
        <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close>
            {hint.map(|text| view! {
                <div class="alert alert--warning">
                    {icon(Icon::AlertTriangle)}
                    <span>{text}</span>
                </div>
            })}
        </RecordDetail>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restock_hint() {
        assert_eq!(restock_hint(StockLevel::InStock, 50, 10), None);
        assert_eq!(
            restock_hint(StockLevel::Low, 8, 10),
            Some("Réapprovisionner : au moins 3 unité(s) pour dépasser le seuil.".to_string())
        );
        assert_eq!(
            restock_hint(StockLevel::OutOfStock, 0, 5),
            Some("Réapprovisionner : au moins 6 unité(s) pour dépasser le seuil.".to_string())
        );
    }
}
