use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::{format_date, format_money};
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Sale,
    Purchase,
    Service,
    Employment,
}

impl FilterCategory for ContractKind {
    const ALL: &'static [Self] = &[
        ContractKind::Sale,
        ContractKind::Purchase,
        ContractKind::Service,
        ContractKind::Employment,
    ];

    fn code(&self) -> &'static str {
        match self {
            ContractKind::Sale => "sale",
            ContractKind::Purchase => "purchase",
            ContractKind::Service => "service",
            ContractKind::Employment => "employment",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContractKind::Sale => "Vente",
            ContractKind::Purchase => "Achat",
            ContractKind::Service => "Prestation",
            ContractKind::Employment => "Travail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    Active,
    Expired,
    Terminated,
}

impl StatusBadge for ContractStatus {
    fn label(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "Brouillon",
            ContractStatus::Active => "En cours",
            ContractStatus::Expired => "Expiré",
            ContractStatus::Terminated => "Résilié",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            ContractStatus::Draft => BadgeTone::Neutral,
            ContractStatus::Active => BadgeTone::Success,
            ContractStatus::Expired => BadgeTone::Warning,
            ContractStatus::Terminated => BadgeTone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub reference: String,
    pub title: String,
    pub counterparty: String,
    pub kind: ContractKind,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub annual_value: f64,
}

impl ListRecord for Contract {
    type Category = ContractKind;
    type Status = ContractStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ContractKind {
        self.kind
    }

    fn status(&self) -> ContractStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.reference.as_str()),
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.counterparty.as_str()),
        ]
    }

    fn title(&self) -> String {
        format!("{} - {}", self.reference, self.title)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Référence", self.reference.clone()),
            ("Objet", self.title.clone()),
            ("Cocontractant", self.counterparty.clone()),
            ("Type", self.kind.label().to_string()),
            ("Statut", self.status.label().to_string()),
            ("Début", format_date(self.start_date)),
            (
                "Fin",
                self.end_date
                    .map(format_date)
                    .unwrap_or_else(|| "Indéterminée".to_string()),
            ),
            ("Valeur annuelle", format_money(self.annual_value)),
        ]
    }
}
