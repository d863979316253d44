//! Показатели обзорного дашборда, считаются по примерам данных страниц.

use contracts::domain::a004_invoice::{Invoice, InvoiceStatus};
use contracts::domain::a006_compliance_item::ComplianceItem;
use contracts::domain::a007_payroll_entry::PayrollEntry;
use contracts::domain::a009_stock_item::{StockItem, StockLevel};
use contracts::shared::record_list::{ListRecord, RecordList, RecordListError};

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceKpi {
    pub status: InvoiceStatus,
    pub count: usize,
    /// Сумма TTC по статусу
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewKpis {
    pub invoices: Vec<InvoiceKpi>,
    /// Выставлено и не оплачено (Envoyée + En retard)
    pub outstanding: f64,
    pub open_compliance: usize,
    pub compliance_total: usize,
    pub payroll_employer_cost: f64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl OverviewKpis {
    pub fn compute(
        invoices: Vec<Invoice>,
        compliance: &[ComplianceItem],
        payroll: &[PayrollEntry],
        stock: &[StockItem],
    ) -> Result<Self, RecordListError> {
        let invoice_list = RecordList::try_new(invoices)?;
        let invoices: Vec<InvoiceKpi> = invoice_list
            .category_counts()
            .into_iter()
            .map(|(status, count)| InvoiceKpi {
                status,
                count,
                total: invoice_list
                    .records()
                    .iter()
                    .filter(|i| i.category() == status)
                    .map(Invoice::amount_incl_tax)
                    .sum(),
            })
            .collect();
        let outstanding = invoices
            .iter()
            .filter(|k| matches!(k.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
            .map(|k| k.total)
            .sum();

        Ok(Self {
            invoices,
            outstanding,
            open_compliance: compliance.iter().filter(|c| c.is_open()).count(),
            compliance_total: compliance.len(),
            payroll_employer_cost: payroll.iter().map(PayrollEntry::employer_cost).sum(),
            low_stock: stock.iter().filter(|s| s.level() == StockLevel::Low).count(),
            out_of_stock: stock
                .iter()
                .filter(|s| s.level() == StockLevel::OutOfStock)
                .count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a004_invoice, a006_compliance_item, a007_payroll_entry, a009_stock_item};

    #[test]
    fn test_compute_from_samples() {
        let kpis = OverviewKpis::compute(
            a004_invoice::sample::records(),
            &a006_compliance_item::sample::records(),
            &a007_payroll_entry::sample::records(),
            &a009_stock_item::sample::records(),
        )
        .unwrap();

        let counted: usize = kpis.invoices.iter().map(|k| k.count).sum();
        assert_eq!(counted, a004_invoice::sample::records().len());
        assert_eq!(kpis.open_compliance, 4);
        assert_eq!(kpis.compliance_total, 6);
        assert_eq!(kpis.low_stock, 3);
        assert_eq!(kpis.out_of_stock, 1);
    }

    #[test]
    fn test_outstanding_counts_sent_and_overdue() {
        let kpis = OverviewKpis::compute(a004_invoice::sample::records(), &[], &[], &[]).unwrap();
        let expected: f64 = a004_invoice::sample::records()
            .iter()
            .filter(|i| matches!(i.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
            .map(Invoice::amount_incl_tax)
            .sum();
        assert!((kpis.outstanding - expected).abs() < 1e-9);
        assert_eq!(kpis.payroll_employer_cost, 0.0);
    }
}
