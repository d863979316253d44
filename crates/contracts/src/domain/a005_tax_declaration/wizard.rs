//! Мастер создания декларации: Период -> Суммы -> Проверка.
//!
//! Перейти дальше можно только с корректно заполненным шагом,
//! назад можно всегда. Результат: черновик декларации, не сохраняется.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dto::{DeclarationKind, DeclarationStatus, TaxDeclaration};
use crate::shared::record_list::FilterCategory;
use crate::shared::validation::{parse_amount, FieldError, ValidationRules};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const PAYMENT_DELAY_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Period,
    Amounts,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Period, WizardStep::Amounts, WizardStep::Review];

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Period => "Période",
            WizardStep::Amounts => "Montants",
            WizardStep::Review => "Vérification",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Period => 0,
            WizardStep::Amounts => 1,
            WizardStep::Review => 2,
        }
    }
}

impl DeclarationKind {
    /// Ставка по умолчанию, %
    pub fn default_rate(&self) -> f64 {
        match self {
            DeclarationKind::Vat => 20.0,
            DeclarationKind::CorporateTax => 25.0,
            DeclarationKind::PayrollTax => 4.25,
            DeclarationKind::LocalTax => 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationWizard {
    pub step: WizardStep,
    pub kind: DeclarationKind,
    /// Значения полей `<input type="date">`, формат YYYY-MM-DD
    pub period_start: String,
    pub period_end: String,
    pub taxable_base: String,
    pub errors: Vec<FieldError>,
}

impl Default for DeclarationWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Period,
            kind: DeclarationKind::Vat,
            period_start: String::new(),
            period_end: String::new(),
            taxable_base: String::new(),
            errors: Vec::new(),
        }
    }
}

impl DeclarationWizard {
    pub fn set_kind_code(&mut self, code: &str) {
        if let Some(kind) = DeclarationKind::from_code(code) {
            self.kind = kind;
        }
    }

    /// Проверяет текущий шаг и переходит к следующему.
    /// Возвращает `false`, если шаг заполнен с ошибками или это последний шаг.
    pub fn next(&mut self) -> bool {
        let errors = match self.step {
            WizardStep::Period => self.period_errors(),
            WizardStep::Amounts => self.amount_errors(),
            WizardStep::Review => return false,
        };
        if !errors.is_empty() {
            log::debug!("wizard: step {:?} has {} errors", self.step, errors.len());
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.step = match self.step {
            WizardStep::Period => WizardStep::Amounts,
            WizardStep::Amounts | WizardStep::Review => WizardStep::Review,
        };
        true
    }

    pub fn back(&mut self) {
        self.errors.clear();
        self.step = match self.step {
            WizardStep::Period | WizardStep::Amounts => WizardStep::Period,
            WizardStep::Review => WizardStep::Amounts,
        };
    }

    /// Рассчитанная сумма налога, если база корректна
    pub fn tax_due(&self) -> Option<f64> {
        let base = parse_amount(&self.taxable_base, "Base imposable").ok()?;
        Some((base * self.kind.default_rate()).round() / 100.0)
    }

    /// Черновик декларации; допускается только на шаге проверки.
    pub fn submit(&mut self, id: String) -> Result<TaxDeclaration, Vec<FieldError>> {
        if self.step != WizardStep::Review {
            return Err(vec![FieldError::new(
                "step",
                "Terminez les étapes précédentes avant de valider",
            )]);
        }
        let mut errors = self.period_errors();
        errors.extend(self.amount_errors());
        let parsed = self.parsed_period().zip(
            parse_amount(&self.taxable_base, "Base imposable").ok(),
        );
        let ((start, end), base) = match parsed {
            Some(values) if errors.is_empty() => values,
            _ => {
                self.errors = errors.clone();
                return Err(errors);
            }
        };
        let due_date = end
            .checked_add_days(Days::new(PAYMENT_DELAY_DAYS))
            .unwrap_or(end);
        let declaration = TaxDeclaration {
            id,
            reference: format!(
                "DECL-{}-{}",
                self.kind.code().to_uppercase(),
                start.format("%Y%m")
            ),
            kind: self.kind,
            period_start: start,
            period_end: end,
            due_date,
            taxable_base: base,
            tax_due: (base * self.kind.default_rate()).round() / 100.0,
            status: DeclarationStatus::Draft,
        };
        log::info!("wizard: draft declaration {} prepared", declaration.reference);
        Ok(declaration)
    }

    fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
    }

    fn parsed_period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            Self::parse_date(&self.period_start)?,
            Self::parse_date(&self.period_end)?,
        ))
    }

    fn period_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let required = ValidationRules::required();
        for (field, label, value) in [
            ("period_start", "Début de période", &self.period_start),
            ("period_end", "Fin de période", &self.period_end),
        ] {
            if let Err(message) = required.validate_string(value, label) {
                errors.push(FieldError::new(field, message));
            } else if Self::parse_date(value).is_none() {
                errors.push(FieldError::new(field, format!("{} : date invalide", label)));
            }
        }
        if errors.is_empty() {
            if let Some((start, end)) = self.parsed_period() {
                if end < start {
                    errors.push(FieldError::new(
                        "period_end",
                        "La fin de période précède le début",
                    ));
                }
            }
        }
        errors
    }

    fn amount_errors(&self) -> Vec<FieldError> {
        let label = "Base imposable";
        match parse_amount(&self.taxable_base, label) {
            Ok(base) => ValidationRules::required()
                .with_min(0.0)
                .validate_number(base, label)
                .err()
                .map(|message| vec![FieldError::new("taxable_base", message)])
                .unwrap_or_default(),
            Err(message) => vec![FieldError::new("taxable_base", message)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    fn filled() -> DeclarationWizard {
        DeclarationWizard {
            period_start: "2024-01-01".to_string(),
            period_end: "2024-03-31".to_string(),
            taxable_base: "10 000".to_string(),
            ..DeclarationWizard::default()
        }
    }

    #[test]
    fn test_cannot_leave_period_step_with_errors() {
        let mut wizard = DeclarationWizard::default();
        assert!(!wizard.next());
        assert_eq!(wizard.step, WizardStep::Period);
        assert!(error_for(&wizard.errors, "period_start").is_some());

        wizard.period_start = "2024-04-01".to_string();
        wizard.period_end = "2024-03-31".to_string();
        assert!(!wizard.next());
        assert_eq!(
            error_for(&wizard.errors, "period_end"),
            Some("La fin de période précède le début")
        );
    }

    #[test]
    fn test_full_walk_produces_draft() {
        let mut wizard = filled();
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Amounts);
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Review);
        assert!(!wizard.next());
        assert_eq!(wizard.tax_due(), Some(2000.0));

        let declaration = wizard.submit("d-99".to_string()).unwrap();
        assert_eq!(declaration.reference, "DECL-VAT-202401");
        assert_eq!(declaration.status, DeclarationStatus::Draft);
        assert_eq!(declaration.tax_due, 2000.0);
        assert_eq!(
            declaration.due_date,
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
        );
    }

    #[test]
    fn test_submit_requires_review_step() {
        let mut wizard = filled();
        let errors = wizard.submit("d-1".to_string()).unwrap_err();
        assert_eq!(errors[0].field, "step");
    }

    #[test]
    fn test_back_never_fails() {
        let mut wizard = filled();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Period);
        wizard.next();
        wizard.next();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Amounts);
    }

    #[test]
    fn test_negative_base_is_rejected() {
        let mut wizard = filled();
        wizard.taxable_base = "-5".to_string();
        wizard.next();
        assert!(!wizard.next());
        assert_eq!(wizard.step, WizardStep::Amounts);
        assert!(error_for(&wizard.errors, "taxable_base").is_some());
    }

    #[test]
    fn test_kind_code_selection() {
        let mut wizard = DeclarationWizard::default();
        wizard.set_kind_code("corporate_tax");
        assert_eq!(wizard.kind, DeclarationKind::CorporateTax);
        wizard.set_kind_code("unknown");
        assert_eq!(wizard.kind, DeclarationKind::CorporateTax);
    }
}
