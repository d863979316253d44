use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::{format_date, format_money, format_period};
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

/// Вид налоговой декларации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Vat,
    CorporateTax,
    PayrollTax,
    LocalTax,
}

impl FilterCategory for DeclarationKind {
    const ALL: &'static [Self] = &[
        DeclarationKind::Vat,
        DeclarationKind::CorporateTax,
        DeclarationKind::PayrollTax,
        DeclarationKind::LocalTax,
    ];

    fn code(&self) -> &'static str {
        match self {
            DeclarationKind::Vat => "vat",
            DeclarationKind::CorporateTax => "corporate_tax",
            DeclarationKind::PayrollTax => "payroll_tax",
            DeclarationKind::LocalTax => "local_tax",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DeclarationKind::Vat => "TVA",
            DeclarationKind::CorporateTax => "Impôt sur les sociétés",
            DeclarationKind::PayrollTax => "Taxe sur les salaires",
            DeclarationKind::LocalTax => "CFE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationStatus {
    Draft,
    Submitted,
    Accepted,
    Rejected,
}

impl StatusBadge for DeclarationStatus {
    fn label(&self) -> &'static str {
        match self {
            DeclarationStatus::Draft => "Brouillon",
            DeclarationStatus::Submitted => "Déposée",
            DeclarationStatus::Accepted => "Acceptée",
            DeclarationStatus::Rejected => "Rejetée",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            DeclarationStatus::Draft => BadgeTone::Neutral,
            DeclarationStatus::Submitted => BadgeTone::Primary,
            DeclarationStatus::Accepted => BadgeTone::Success,
            DeclarationStatus::Rejected => BadgeTone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDeclaration {
    pub id: String,
    pub reference: String,
    pub kind: DeclarationKind,
    /// Первый день отчётного периода
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub due_date: NaiveDate,
    pub taxable_base: f64,
    pub tax_due: f64,
    pub status: DeclarationStatus,
}

impl ListRecord for TaxDeclaration {
    type Category = DeclarationKind;
    type Status = DeclarationStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> DeclarationKind {
        self.kind
    }

    fn status(&self) -> DeclarationStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.reference.as_str()),
            Cow::Owned(format_period(self.period_start)),
            Cow::Borrowed(self.kind.label()),
        ]
    }

    fn title(&self) -> String {
        format!("{} {}", self.kind.label(), self.reference)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Référence", self.reference.clone()),
            ("Type", self.kind.label().to_string()),
            (
                "Période",
                format!(
                    "du {} au {}",
                    format_date(self.period_start),
                    format_date(self.period_end)
                ),
            ),
            ("Date limite", format_date(self.due_date)),
            ("Base imposable", format_money(self.taxable_base)),
            ("Montant dû", format_money(self.tax_due)),
            ("Statut", self.status.label().to_string()),
        ]
    }
}
