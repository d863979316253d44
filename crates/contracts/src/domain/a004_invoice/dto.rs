use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::{format_date, format_money};
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

/// Статус счёта; он же категория фильтра списка счетов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl FilterCategory for InvoiceStatus {
    const ALL: &'static [Self] = &[
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        StatusBadge::label(self)
    }
}

impl StatusBadge for InvoiceStatus {
    fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Brouillon",
            InvoiceStatus::Sent => "Envoyée",
            InvoiceStatus::Paid => "Payée",
            InvoiceStatus::Overdue => "En retard",
            InvoiceStatus::Cancelled => "Annulée",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            InvoiceStatus::Draft => BadgeTone::Neutral,
            InvoiceStatus::Sent => BadgeTone::Primary,
            InvoiceStatus::Paid => BadgeTone::Success,
            InvoiceStatus::Overdue => BadgeTone::Error,
            InvoiceStatus::Cancelled => BadgeTone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Номер вида `2024-001`
    pub number: String,
    pub customer: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount_excl_tax: f64,
    pub vat_rate: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn display_name(&self) -> String {
        format!("Facture #{}", self.number)
    }

    pub fn vat_amount(&self) -> f64 {
        (self.amount_excl_tax * self.vat_rate / 100.0 * 100.0).round() / 100.0
    }

    pub fn amount_incl_tax(&self) -> f64 {
        self.amount_excl_tax + self.vat_amount()
    }
}

impl ListRecord for Invoice {
    type Category = InvoiceStatus;
    type Status = InvoiceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> InvoiceStatus {
        self.status
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.display_name()),
            Cow::Borrowed(self.customer.as_str()),
            Cow::Owned(format_date(self.issue_date)),
            Cow::Owned(format_money(self.amount_incl_tax())),
        ]
    }

    fn title(&self) -> String {
        self.display_name()
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Numéro", self.display_name()),
            ("Client", self.customer.clone()),
            ("Date d'émission", format_date(self.issue_date)),
            ("Échéance", format_date(self.due_date)),
            ("Montant HT", format_money(self.amount_excl_tax)),
            ("TVA", format!("{} ({} %)", format_money(self.vat_amount()), self.vat_rate)),
            ("Montant TTC", format_money(self.amount_incl_tax())),
            ("Statut", StatusBadge::label(&self.status).to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_amount_rounds_to_cents() {
        let invoice = Invoice {
            id: "1".to_string(),
            number: "2024-001".to_string(),
            customer: "Boulangerie Lemoine".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            amount_excl_tax: 1234.55,
            vat_rate: 20.0,
            status: InvoiceStatus::Sent,
        };
        assert_eq!(invoice.vat_amount(), 246.91);
        assert_eq!(invoice.display_name(), "Facture #2024-001");
    }
}
