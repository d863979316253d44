use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::{format_money, format_period};
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Sales,
    Finance,
    Operations,
    HumanResources,
}

impl FilterCategory for Department {
    const ALL: &'static [Self] = &[
        Department::Sales,
        Department::Finance,
        Department::Operations,
        Department::HumanResources,
    ];

    fn code(&self) -> &'static str {
        match self {
            Department::Sales => "sales",
            Department::Finance => "finance",
            Department::Operations => "operations",
            Department::HumanResources => "human_resources",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Department::Sales => "Commercial",
            Department::Finance => "Finance",
            Department::Operations => "Exploitation",
            Department::HumanResources => "Ressources humaines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    Draft,
    Validated,
    Paid,
}

impl StatusBadge for PayrollStatus {
    fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Draft => "Brouillon",
            PayrollStatus::Validated => "Validé",
            PayrollStatus::Paid => "Payé",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            PayrollStatus::Draft => BadgeTone::Neutral,
            PayrollStatus::Validated => BadgeTone::Primary,
            PayrollStatus::Paid => BadgeTone::Success,
        }
    }
}

/// Строка ведомости: один сотрудник за один месяц
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: String,
    pub employee: String,
    pub department: Department,
    /// Первый день месяца
    pub period: NaiveDate,
    pub gross_salary: f64,
    pub employee_contributions: f64,
    pub employer_contributions: f64,
    pub status: PayrollStatus,
}

impl PayrollEntry {
    pub fn net_salary(&self) -> f64 {
        self.gross_salary - self.employee_contributions
    }

    /// Полная стоимость для работодателя
    pub fn employer_cost(&self) -> f64 {
        self.gross_salary + self.employer_contributions
    }
}

impl ListRecord for PayrollEntry {
    type Category = Department;
    type Status = PayrollStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Department {
        self.department
    }

    fn status(&self) -> PayrollStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.employee.as_str()),
            Cow::Owned(format_period(self.period)),
            Cow::Borrowed(self.department.label()),
        ]
    }

    fn title(&self) -> String {
        format!("Paie {} {}", self.employee, format_period(self.period))
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Salarié", self.employee.clone()),
            ("Service", self.department.label().to_string()),
            ("Période", format_period(self.period)),
            ("Salaire brut", format_money(self.gross_salary)),
            ("Cotisations salariales", format_money(self.employee_contributions)),
            ("Net à payer", format_money(self.net_salary())),
            ("Cotisations patronales", format_money(self.employer_contributions)),
            ("Coût employeur", format_money(self.employer_cost())),
            ("Statut", self.status.label().to_string()),
        ]
    }
}
