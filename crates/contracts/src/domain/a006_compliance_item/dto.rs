use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::format_date;
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

/// Область обязательства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceArea {
    Fiscal,
    Social,
    Legal,
}

impl FilterCategory for ComplianceArea {
    const ALL: &'static [Self] = &[
        ComplianceArea::Fiscal,
        ComplianceArea::Social,
        ComplianceArea::Legal,
    ];

    fn code(&self) -> &'static str {
        match self {
            ComplianceArea::Fiscal => "fiscal",
            ComplianceArea::Social => "social",
            ComplianceArea::Legal => "legal",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ComplianceArea::Fiscal => "Fiscal",
            ComplianceArea::Social => "Social",
            ComplianceArea::Legal => "Juridique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    NonCompliant,
}

impl StatusBadge for ComplianceStatus {
    fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Conforme",
            ComplianceStatus::Pending => "À traiter",
            ComplianceStatus::NonCompliant => "Non conforme",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            ComplianceStatus::Compliant => BadgeTone::Success,
            ComplianceStatus::Pending => BadgeTone::Warning,
            ComplianceStatus::NonCompliant => BadgeTone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub authority: String,
    pub owner: String,
    pub area: ComplianceArea,
    pub status: ComplianceStatus,
    pub deadline: NaiveDate,
    pub notes: String,
}

impl ComplianceItem {
    /// Не закрыто: требует действий
    pub fn is_open(&self) -> bool {
        self.status != ComplianceStatus::Compliant
    }
}

impl ListRecord for ComplianceItem {
    type Category = ComplianceArea;
    type Status = ComplianceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ComplianceArea {
        self.area
    }

    fn status(&self) -> ComplianceStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.authority.as_str()),
            Cow::Borrowed(self.owner.as_str()),
        ]
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Obligation", self.title.clone()),
            ("Organisme", self.authority.clone()),
            ("Responsable", self.owner.clone()),
            ("Domaine", self.area.label().to_string()),
            ("Statut", self.status.label().to_string()),
            ("Échéance", format_date(self.deadline)),
            ("Notes", self.notes.clone()),
        ]
    }
}
