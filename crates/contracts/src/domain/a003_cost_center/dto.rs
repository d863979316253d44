use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::format_money;
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

/// Тип центра затрат
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCenterKind {
    Cost,
    Profit,
    Investment,
}

impl FilterCategory for CostCenterKind {
    const ALL: &'static [Self] = &[
        CostCenterKind::Cost,
        CostCenterKind::Profit,
        CostCenterKind::Investment,
    ];

    fn code(&self) -> &'static str {
        match self {
            CostCenterKind::Cost => "cost",
            CostCenterKind::Profit => "profit",
            CostCenterKind::Investment => "investment",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CostCenterKind::Cost => "Centre de coûts",
            CostCenterKind::Profit => "Centre de profit",
            CostCenterKind::Investment => "Centre d'investissement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCenterStatus {
    Active,
    Closed,
}

impl StatusBadge for CostCenterStatus {
    fn label(&self) -> &'static str {
        match self {
            CostCenterStatus::Active => "Actif",
            CostCenterStatus::Closed => "Clôturé",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            CostCenterStatus::Active => BadgeTone::Success,
            CostCenterStatus::Closed => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: String,
    pub code: String,
    pub name: String,
    pub manager: String,
    pub kind: CostCenterKind,
    pub status: CostCenterStatus,
    pub budget: f64,
    pub spent: f64,
}

impl CostCenter {
    /// Доля израсходованного бюджета, %
    pub fn consumption_percent(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            self.spent / self.budget * 100.0
        }
    }
}

impl ListRecord for CostCenter {
    type Category = CostCenterKind;
    type Status = CostCenterStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> CostCenterKind {
        self.kind
    }

    fn status(&self) -> CostCenterStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.code.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.manager.as_str()),
        ]
    }

    fn title(&self) -> String {
        format!("{} {}", self.code, self.name)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Code", self.code.clone()),
            ("Libellé", self.name.clone()),
            ("Responsable", self.manager.clone()),
            ("Type", self.kind.label().to_string()),
            ("Statut", self.status.label().to_string()),
            ("Budget", format_money(self.budget)),
            ("Consommé", format_money(self.spent)),
            ("Consommation", format!("{:.0} %", self.consumption_percent())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_percent() {
        let mut cc = CostCenter {
            id: "1".to_string(),
            code: "CC-100".to_string(),
            name: "Production".to_string(),
            manager: "Luc Martin".to_string(),
            kind: CostCenterKind::Cost,
            status: CostCenterStatus::Active,
            budget: 200_000.0,
            spent: 50_000.0,
        };
        assert_eq!(cc.consumption_percent(), 25.0);
        cc.budget = 0.0;
        assert_eq!(cc.consumption_percent(), 0.0);
    }
}
