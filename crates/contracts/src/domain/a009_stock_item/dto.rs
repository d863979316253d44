use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::{format_money, format_number_int};
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockCategory {
    RawMaterial,
    FinishedGood,
    Consumable,
}

impl FilterCategory for StockCategory {
    const ALL: &'static [Self] = &[
        StockCategory::RawMaterial,
        StockCategory::FinishedGood,
        StockCategory::Consumable,
    ];

    fn code(&self) -> &'static str {
        match self {
            StockCategory::RawMaterial => "raw_material",
            StockCategory::FinishedGood => "finished_good",
            StockCategory::Consumable => "consumable",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StockCategory::RawMaterial => "Matière première",
            StockCategory::FinishedGood => "Produit fini",
            StockCategory::Consumable => "Consommable",
        }
    }
}

/// Уровень остатка, вычисляется из количества и точки перезаказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    Low,
    OutOfStock,
}

impl StatusBadge for StockLevel {
    fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "En stock",
            StockLevel::Low => "Stock bas",
            StockLevel::OutOfStock => "Rupture",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            StockLevel::InStock => BadgeTone::Success,
            StockLevel::Low => BadgeTone::Warning,
            StockLevel::OutOfStock => BadgeTone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub location: String,
    pub category: StockCategory,
    pub quantity: u32,
    pub reorder_point: u32,
    pub unit_cost: f64,
}

impl StockItem {
    pub fn level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::OutOfStock
        } else if self.quantity <= self.reorder_point {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }
}

impl ListRecord for StockItem {
    type Category = StockCategory;
    type Status = StockLevel;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> StockCategory {
        self.category
    }

    fn status(&self) -> StockLevel {
        self.level()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.sku.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.location.as_str()),
        ]
    }

    fn title(&self) -> String {
        format!("{} {}", self.sku, self.name)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Référence", self.sku.clone()),
            ("Article", self.name.clone()),
            ("Emplacement", self.location.clone()),
            ("Catégorie", self.category.label().to_string()),
            ("Quantité", format_number_int(self.quantity as f64)),
            ("Seuil de réapprovisionnement", format_number_int(self.reorder_point as f64)),
            ("Coût unitaire", format_money(self.unit_cost)),
            ("Valeur du stock", format_money(self.stock_value())),
            ("Niveau", self.level().label().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32) -> StockItem {
        StockItem {
            id: "1".to_string(),
            sku: "MP-001".to_string(),
            name: "Farine T55".to_string(),
            location: "Entrepôt A".to_string(),
            category: StockCategory::RawMaterial,
            quantity,
            reorder_point: 10,
            unit_cost: 0.8,
        }
    }

    #[test]
    fn test_level_from_quantity() {
        assert_eq!(item(0).level(), StockLevel::OutOfStock);
        assert_eq!(item(10).level(), StockLevel::Low);
        assert_eq!(item(11).level(), StockLevel::InStock);
    }
}
