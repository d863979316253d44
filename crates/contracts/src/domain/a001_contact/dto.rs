use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

/// Тип контакта CRM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Client,
    Prospect,
    Supplier,
    Partner,
}

impl FilterCategory for ContactKind {
    const ALL: &'static [Self] = &[
        ContactKind::Client,
        ContactKind::Prospect,
        ContactKind::Supplier,
        ContactKind::Partner,
    ];

    fn code(&self) -> &'static str {
        match self {
            ContactKind::Client => "client",
            ContactKind::Prospect => "prospect",
            ContactKind::Supplier => "supplier",
            ContactKind::Partner => "partner",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContactKind::Client => "Client",
            ContactKind::Prospect => "Prospect",
            ContactKind::Supplier => "Fournisseur",
            ContactKind::Partner => "Partenaire",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Active,
    Inactive,
}

impl StatusBadge for ContactStatus {
    fn label(&self) -> &'static str {
        match self {
            ContactStatus::Active => "Actif",
            ContactStatus::Inactive => "Inactif",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            ContactStatus::Active => BadgeTone::Success,
            ContactStatus::Inactive => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub kind: ContactKind,
    pub status: ContactStatus,
}

impl ListRecord for Contact {
    type Category = ContactKind;
    type Status = ContactStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ContactKind {
        self.kind
    }

    fn status(&self) -> ContactStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.phone.as_str()),
            Cow::Borrowed(self.city.as_str()),
        ]
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Nom", self.name.clone()),
            ("Société", self.company.clone()),
            ("E-mail", self.email.clone()),
            ("Téléphone", self.phone.clone()),
            ("Ville", self.city.clone()),
            ("Type", self.kind.label().to_string()),
            ("Statut", self.status.label().to_string()),
        ]
    }
}
