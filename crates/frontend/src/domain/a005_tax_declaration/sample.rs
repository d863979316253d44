use chrono::NaiveDate;
use contracts::domain::a005_tax_declaration::{DeclarationKind, DeclarationStatus, TaxDeclaration};

use crate::domain::ymd;

fn declaration(
    id: &str,
    reference: &str,
    kind: DeclarationKind,
    period: (NaiveDate, NaiveDate),
    due_date: NaiveDate,
    taxable_base: f64,
    status: DeclarationStatus,
) -> TaxDeclaration {
    TaxDeclaration {
        id: id.to_string(),
        reference: reference.to_string(),
        kind,
        period_start: period.0,
        period_end: period.1,
        due_date,
        taxable_base,
        tax_due: (taxable_base * kind.default_rate()).round() / 100.0,
        status,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<TaxDeclaration> {
    use DeclarationKind::*;
    use DeclarationStatus::*;
    vec![
        declaration("1", "DECL-VAT-202401", Vat, (ymd(2024, 1, 1), ymd(2024, 3, 31)), ymd(2024, 4, 24), 86_400.0, Accepted),
        declaration("2", "DECL-VAT-202404", Vat, (ymd(2024, 4, 1), ymd(2024, 6, 30)), ymd(2024, 7, 24), 91_250.0, Submitted),
        declaration("3", "DECL-CORPORATE_TAX-202301", CorporateTax, (ymd(2023, 1, 1), ymd(2023, 12, 31)), ymd(2024, 5, 15), 142_000.0, Accepted),
        declaration("4", "DECL-PAYROLL_TAX-202401", PayrollTax, (ymd(2024, 1, 1), ymd(2024, 6, 30)), ymd(2024, 7, 15), 210_000.0, Rejected),
        declaration("5", "DECL-LOCAL_TAX-202401", LocalTax, (ymd(2024, 1, 1), ymd(2024, 12, 31)), ymd(2024, 12, 15), 35_000.0, Draft),
    ]
}
