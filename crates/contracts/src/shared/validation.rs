//! Validation rules for form fields

use email_address::EmailAddress;
use std::str::FromStr;

/// Ошибка поля формы, показывается под полем
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ищет ошибку для конкретного поля
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub email: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            email: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required field holding an e-mail address
    pub const fn required_email() -> Self {
        Self {
            required: true,
            email: true,
            ..Self::none()
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} est obligatoire", field_label));
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if trimmed.chars().count() < min {
                return Err(format!(
                    "{} doit contenir au moins {} caractères",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(format!(
                    "{} ne doit pas dépasser {} caractères",
                    field_label, max
                ));
            }
        }

        if self.email {
            validate_email(trimmed, field_label)?;
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} doit être au moins {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} ne doit pas dépasser {}", field_label, max));
            }
        }
        Ok(())
    }
}

pub fn validate_email(value: &str, field_label: &str) -> Result<(), String> {
    EmailAddress::from_str(value)
        .map(|_| ())
        .map_err(|_| format!("{} n'est pas une adresse e-mail valide", field_label))
}

/// Разбор суммы из поля ввода: допускает запятую и пробелы-разделители
pub fn parse_amount(value: &str, field_label: &str) -> Result<f64, String> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(format!("{} est obligatoire", field_label));
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} doit être un nombre", field_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Nom").is_err());
        assert!(rules.validate_string("Dupont", "Nom").is_ok());
        assert!(ValidationRules::none().validate_string("", "Nom").is_ok());
    }

    #[test]
    fn test_email() {
        let rules = ValidationRules::required_email();
        assert!(rules.validate_string("marie.dupont@exemple.fr", "E-mail").is_ok());
        assert_eq!(
            rules.validate_string("marie.dupont", "E-mail"),
            Err("E-mail n'est pas une adresse e-mail valide".to_string())
        );
    }

    #[test]
    fn test_lengths_and_numbers() {
        let rules = ValidationRules::none().with_max_length(3);
        assert!(rules.validate_string("abcd", "Code").is_err());
        let rules = ValidationRules::required().with_min(0.0);
        assert!(rules.validate_number(-1.0, "Montant").is_err());
        assert!(rules.validate_number(0.0, "Montant").is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 234,50", "Montant"), Ok(1234.5));
        assert_eq!(parse_amount("12.5", "Montant"), Ok(12.5));
        assert!(parse_amount("", "Montant").is_err());
        assert!(parse_amount("abc", "Montant").is_err());
    }

    #[test]
    fn test_error_for() {
        let errors = vec![FieldError::new("email", "bad")];
        assert_eq!(error_for(&errors, "email"), Some("bad"));
        assert_eq!(error_for(&errors, "name"), None);
    }
}
