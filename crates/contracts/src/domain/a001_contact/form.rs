use serde::{Deserialize, Serialize};

use super::dto::{Contact, ContactKind, ContactStatus};
use crate::shared::validation::{FieldError, ValidationRules};

/// Черновик формы создания контакта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub kind: ContactKind,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            kind: ContactKind::Prospect,
        }
    }
}

impl ContactDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let checks = [
            ("name", "Nom", &self.name, ValidationRules::required().with_max_length(120)),
            ("email", "E-mail", &self.email, ValidationRules::required_email()),
            ("company", "Société", &self.company, ValidationRules::none().with_max_length(120)),
            ("phone", "Téléphone", &self.phone, ValidationRules::none().with_max_length(30)),
        ];
        checks
            .into_iter()
            .filter_map(|(field, label, value, rules)| {
                rules
                    .validate_string(value, label)
                    .err()
                    .map(|message| FieldError::new(field, message))
            })
            .collect()
    }

    /// Собирает контакт из корректного черновика
    pub fn into_contact(self, id: String) -> Result<Contact, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Contact {
            id,
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            kind: self.kind,
            status: ContactStatus::Active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let errors = ContactDraft::default().validate();
        assert_eq!(error_for(&errors, "name"), Some("Nom est obligatoire"));
        assert_eq!(error_for(&errors, "email"), Some("E-mail est obligatoire"));
        assert_eq!(error_for(&errors, "company"), None);
    }

    #[test]
    fn test_valid_draft_becomes_active_contact() {
        let draft = ContactDraft {
            name: " Marie Dupont ".to_string(),
            email: "marie.dupont@exemple.fr".to_string(),
            kind: ContactKind::Client,
            ..ContactDraft::default()
        };
        let contact = draft.into_contact("c-100".to_string()).unwrap();
        assert_eq!(contact.name, "Marie Dupont");
        assert_eq!(contact.status, ContactStatus::Active);
        assert_eq!(contact.kind, ContactKind::Client);
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let draft = ContactDraft {
            name: "Marie".to_string(),
            email: "marie@".to_string(),
            ..ContactDraft::default()
        };
        let errors = draft.into_contact("c-1".to_string()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }
}
