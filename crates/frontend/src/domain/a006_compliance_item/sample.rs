use chrono::NaiveDate;
use contracts::domain::a006_compliance_item::{ComplianceArea, ComplianceItem, ComplianceStatus};

use crate::domain::ymd;

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    authority: &str,
    owner: &str,
    area: ComplianceArea,
    status: ComplianceStatus,
    deadline: NaiveDate,
    notes: &str,
) -> ComplianceItem {
    ComplianceItem {
        id: id.to_string(),
        title: title.to_string(),
        authority: authority.to_string(),
        owner: owner.to_string(),
        area,
        status,
        deadline,
        notes: notes.to_string(),
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<ComplianceItem> {
    use ComplianceArea::*;
    use ComplianceStatus::*;
    vec![
        item("1", "Dépôt de la liasse fiscale", "DGFiP", "Claire Fontaine", Fiscal, Compliant, ymd(2024, 5, 20), "Déposée via EDI-TDFC."),
        item("2", "Déclaration sociale nominative", "URSSAF", "Nadia Benali", Social, Pending, ymd(2024, 6, 5), "DSN de mai en préparation."),
        item("3", "Registre unique du personnel", "Inspection du travail", "Nadia Benali", Social, NonCompliant, ymd(2024, 4, 30), "Deux entrées manquantes."),
        item("4", "Approbation des comptes annuels", "Greffe du tribunal de commerce", "Paul Girard", Legal, Pending, ymd(2024, 6, 30), "Assemblée générale fixée au 25 juin."),
        item("5", "Document unique d'évaluation des risques", "Médecine du travail", "Luc Martin", Legal, Compliant, ymd(2024, 3, 1), "Mis à jour après l'installation du four."),
        item("6", "Acomptes d'impôt sur les sociétés", "DGFiP", "Claire Fontaine", Fiscal, NonCompliant, ymd(2024, 3, 15), "Acompte de mars réglé en retard."),
    ]
}
