pub mod a001_contact;
pub mod a002_contract;
pub mod a003_cost_center;
pub mod a004_invoice;
pub mod a005_tax_declaration;
pub mod a006_compliance_item;
pub mod a007_payroll_entry;
pub mod a008_work_schedule;
pub mod a009_stock_item;

use chrono::NaiveDate;

/// Дата для примеров данных
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use contracts::shared::record_list::RecordList;

    use super::*;

    #[test]
    fn test_sample_collections_are_well_formed() {
        assert!(RecordList::try_new(a001_contact::sample::records()).is_ok());
        assert!(RecordList::try_new(a002_contract::sample::records()).is_ok());
        assert!(RecordList::try_new(a003_cost_center::sample::records()).is_ok());
        assert!(RecordList::try_new(a004_invoice::sample::records()).is_ok());
        assert!(RecordList::try_new(a005_tax_declaration::sample::records()).is_ok());
        assert!(RecordList::try_new(a006_compliance_item::sample::records()).is_ok());
        assert!(RecordList::try_new(a007_payroll_entry::sample::records()).is_ok());
        assert!(RecordList::try_new(a008_work_schedule::sample::records()).is_ok());
        assert!(RecordList::try_new(a009_stock_item::sample::records()).is_ok());
    }

    #[test]
    fn test_invoice_search_by_number() {
        let mut list = RecordList::try_new(a004_invoice::sample::records()).unwrap();
        list.set_search_query("2024-001");
        let titles: Vec<String> = list.visible_records().iter().map(|i| i.display_name()).collect();
        assert_eq!(titles, vec!["Facture #2024-001".to_string()]);
    }
}
