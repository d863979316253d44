use chrono::NaiveDate;
use contracts::domain::a004_invoice::{Invoice, InvoiceStatus};

use crate::domain::ymd;

fn invoice(
    id: &str,
    number: &str,
    customer: &str,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    amount_excl_tax: f64,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: number.to_string(),
        customer: customer.to_string(),
        issue_date,
        due_date,
        amount_excl_tax,
        vat_rate: 20.0,
        status,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<Invoice> {
    use InvoiceStatus::*;
    vec![
        invoice("1", "2024-001", "Hyper Centre Lyon", ymd(2024, 1, 15), ymd(2024, 2, 14), 12_500.0, Paid),
        invoice("2", "2024-002", "Café des Arts", ymd(2024, 2, 3), ymd(2024, 3, 4), 1_840.0, Paid),
        invoice("3", "2024-003", "Restaurant Le Gône", ymd(2024, 3, 12), ymd(2024, 4, 11), 3_275.5, Overdue),
        invoice("4", "2024-004", "Hyper Centre Lyon", ymd(2024, 4, 15), ymd(2024, 5, 15), 13_100.0, Sent),
        invoice("5", "2024-005", "Traiteur Saveurs", ymd(2024, 5, 2), ymd(2024, 6, 1), 980.0, Cancelled),
        invoice("6", "2024-006", "Café des Arts", ymd(2024, 5, 20), ymd(2024, 6, 19), 2_150.0, Draft),
    ]
}
