use contracts::domain::a003_cost_center::{CostCenter, CostCenterKind, CostCenterStatus};

fn center(
    id: &str,
    code: &str,
    name: &str,
    manager: &str,
    kind: CostCenterKind,
    budget: f64,
    spent: f64,
) -> CostCenter {
    CostCenter {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        manager: manager.to_string(),
        kind,
        status: CostCenterStatus::Active,
        budget,
        spent,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<CostCenter> {
    use CostCenterKind::*;
    let mut closed = center("5", "CC-900", "Ancien dépôt Villeurbanne", "Paul Girard", Cost, 15_000.0, 14_200.0);
    closed.status = CostCenterStatus::Closed;
    vec![
        center("1", "CC-100", "Production", "Luc Martin", Cost, 250_000.0, 182_500.0),
        center("2", "CC-200", "Administration", "Claire Fontaine", Cost, 90_000.0, 97_300.0),
        center("3", "CC-300", "Boutique Bellecour", "Nadia Benali", Profit, 60_000.0, 21_000.0),
        center("4", "CC-400", "Nouvelle ligne de cuisson", "Luc Martin", Investment, 400_000.0, 130_000.0),
        closed,
    ]
}
