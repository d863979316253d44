use chrono::NaiveDate;
use contracts::domain::a003_cost_center::{CostCenter, CostCenterKind, CostCenterStatus};
use contracts::domain::a004_invoice::{Invoice, InvoiceStatus};
use contracts::shared::record_list::{ExpansionState, ListRecord, RecordList};

fn cost_center(id: &str, code: &str, name: &str, kind: CostCenterKind) -> CostCenter {
    CostCenter {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        manager: "Claire Bernard".to_string(),
        kind,
        status: CostCenterStatus::Active,
        budget: 100_000.0,
        spent: 40_000.0,
    }
}

fn invoice(id: &str, number: &str, customer: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: number.to_string(),
        customer: customer.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
        amount_excl_tax: 1500.0,
        vat_rate: 20.0,
        status,
    }
}

fn cost_centers() -> RecordList<CostCenter> {
    RecordList::try_new(vec![
        cost_center("1", "CC-100", "Production", CostCenterKind::Cost),
        cost_center("2", "CC-200", "Logistique", CostCenterKind::Cost),
        cost_center("3", "CP-300", "Ventes France", CostCenterKind::Profit),
    ])
    .unwrap()
}

fn invoices() -> RecordList<Invoice> {
    RecordList::try_new(vec![
        invoice("1", "2024-001", "Boulangerie Lemoine", InvoiceStatus::Paid),
        invoice("2", "2024-002", "Garage Petit", InvoiceStatus::Sent),
        invoice("3", "2024-003", "Cabinet Roux", InvoiceStatus::Overdue),
    ])
    .unwrap()
}

#[test]
fn category_filter_keeps_matching_records_in_source_order() {
    let mut list = cost_centers();
    list.toggle_category("cost");

    let visible: Vec<&str> = list.visible_records().iter().map(|c| c.id()).collect();
    assert_eq!(visible, vec!["1", "2"]);
    assert_eq!(list.active_filters_count(), 1);
}

#[test]
fn search_by_invoice_number_then_clear() {
    let mut list = invoices();
    list.set_search_query("2024-001");

    let titles: Vec<String> = list.visible_records().iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["Facture #2024-001".to_string()]);

    list.set_search_query("");
    assert_eq!(list.visible_count(), 3);
}

#[test]
fn search_matches_customer_case_insensitively() {
    let mut list = invoices();
    list.set_search_query("gARAGE");
    let visible: Vec<&str> = list.visible_records().iter().map(|i| i.id()).collect();
    assert_eq!(visible, vec!["2"]);
}

#[test]
fn search_keeps_surrounding_spaces() {
    let single_word_manager = |center: CostCenter| CostCenter {
        manager: "Bernard".to_string(),
        ..center
    };
    let mut list = RecordList::try_new(vec![
        single_word_manager(cost_center("1", "CC-100", "Paris Nord", CostCenterKind::Cost)),
        single_word_manager(cost_center("2", "CC-200", "Lyon", CostCenterKind::Cost)),
    ])
    .unwrap();

    list.set_search_query(" ");
    let visible: Vec<&str> = list.visible_records().iter().map(|c| c.id()).collect();
    assert_eq!(visible, vec!["1"]);
    assert_eq!(list.active_filters_count(), 1);

    list.set_search_query("Nord ");
    assert_eq!(list.visible_count(), 0);

    list.set_search_query("paris ");
    let visible: Vec<&str> = list.visible_records().iter().map(|c| c.id()).collect();
    assert_eq!(visible, vec!["1"]);
}

#[test]
fn expanding_another_row_collapses_the_previous_one() {
    let mut list = invoices();
    list.toggle_expand("1");
    assert_eq!(list.expansion(), &ExpansionState::Expanded("1".to_string()));

    list.toggle_expand("2");
    assert_eq!(list.expansion(), &ExpansionState::Expanded("2".to_string()));
    assert!(!list.is_expanded("1"));

    list.toggle_expand("2");
    assert_eq!(list.expansion(), &ExpansionState::Collapsed);
}

#[test]
fn search_without_matches_yields_empty_view() {
    let mut list = cost_centers();
    list.set_search_query("nonexistent-xyz");
    assert!(list.visible_records().is_empty());
    assert_eq!(list.len(), 3);
}

#[test]
fn status_category_filter_on_invoices() {
    let mut list = invoices();
    list.toggle(InvoiceStatus::Overdue);
    list.toggle(InvoiceStatus::Paid);
    let visible: Vec<&str> = list.visible_records().iter().map(|i| i.id()).collect();
    assert_eq!(visible, vec!["1", "3"]);

    list.clear_filters();
    assert_eq!(list.active_filters_count(), 0);
    assert_eq!(list.visible_count(), 3);
}
