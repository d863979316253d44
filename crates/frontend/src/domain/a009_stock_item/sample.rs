use contracts::domain::a009_stock_item::{StockCategory, StockItem};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    sku: &str,
    name: &str,
    location: &str,
    category: StockCategory,
    quantity: u32,
    reorder_point: u32,
    unit_cost: f64,
) -> StockItem {
    StockItem {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        category,
        quantity,
        reorder_point,
        unit_cost,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<StockItem> {
    use StockCategory::*;
    vec![
        item("1", "MP-001", "Farine T55 (sac 25 kg)", "Entrepôt A", RawMaterial, 140, 40, 18.5),
        item("2", "MP-002", "Beurre AOP (plaque 1 kg)", "Chambre froide", RawMaterial, 12, 20, 9.8),
        item("3", "MP-003", "Levure fraîche (500 g)", "Chambre froide", RawMaterial, 0, 10, 2.4),
        item("4", "PF-010", "Baguette tradition surgelée", "Congélateur 2", FinishedGood, 650, 200, 0.35),
        item("5", "PF-011", "Croissant pur beurre surgelé", "Congélateur 2", FinishedGood, 180, 200, 0.52),
        item("6", "CO-100", "Sachets kraft", "Réserve boutique", Consumable, 2_400, 500, 0.04),
        item("7", "CO-101", "Gants nitrile (boîte)", "Réserve boutique", Consumable, 3, 5, 6.9),
    ]
}
