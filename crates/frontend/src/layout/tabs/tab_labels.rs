//! Tab labels - заголовки табов.
//!
//! Ключи списков совпадают с `ENTITY` доменных модулей contracts.

use contracts::domain::{
    a001_contact, a002_contract, a003_cost_center, a004_invoice, a005_tax_declaration,
    a006_compliance_item, a007_payroll_entry, a008_work_schedule, a009_stock_item,
};

/// Возвращает читаемый заголовок таба для данного ключа.
/// Для неизвестных ключей пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Списки ────────────────────────────────────────────────────────
        a001_contact::ENTITY => "Contacts",
        a002_contract::ENTITY => "Contrats",
        a003_cost_center::ENTITY => "Centres de coûts",
        a004_invoice::ENTITY => "Factures",
        a005_tax_declaration::ENTITY => "Déclarations fiscales",
        a006_compliance_item::ENTITY => "Conformité",
        a007_payroll_entry::ENTITY => "Paie",
        a008_work_schedule::ENTITY => "Plannings",
        a009_stock_item::ENTITY => "Stocks",

        // ── Формы и мастера ───────────────────────────────────────────────
        "a001_contact_new" => "Nouveau contact",
        "a005_tax_declaration_new" => "Nouvelle déclaration",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Vue d'ensemble",

        _ => "",
    }
}

/// Название одного элемента сущности (для detail-табов).
pub fn entity_element_name(entity: &str) -> &'static str {
    match entity {
        a001_contact::ENTITY => "Contact",
        a002_contract::ENTITY => "Contrat",
        a003_cost_center::ENTITY => "Centre de coûts",
        a004_invoice::ENTITY => "Facture",
        a005_tax_declaration::ENTITY => "Déclaration",
        a006_compliance_item::ENTITY => "Obligation",
        a007_payroll_entry::ENTITY => "Bulletin",
        a008_work_schedule::ENTITY => "Planning",
        a009_stock_item::ENTITY => "Article",
        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    if entity_label.is_empty() {
        identifier.to_string()
    } else {
        format!("{} · {}", entity_label, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_has_labels() {
        for entity in [
            a001_contact::ENTITY,
            a002_contract::ENTITY,
            a003_cost_center::ENTITY,
            a004_invoice::ENTITY,
            a005_tax_declaration::ENTITY,
            a006_compliance_item::ENTITY,
            a007_payroll_entry::ENTITY,
            a008_work_schedule::ENTITY,
            a009_stock_item::ENTITY,
        ] {
            assert!(!tab_label_for_key(entity).is_empty(), "{entity}");
            assert!(!entity_element_name(entity).is_empty(), "{entity}");
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_detail_tab_label() {
        assert_eq!(detail_tab_label("Facture", "2024-001"), "Facture · 2024-001");
        assert_eq!(detail_tab_label("", "42"), "42");
    }
}
