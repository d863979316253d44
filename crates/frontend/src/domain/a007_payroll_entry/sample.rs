use contracts::domain::a007_payroll_entry::{Department, PayrollEntry, PayrollStatus};

use crate::domain::ymd;

// Взносы упрощённо: 22 % с работника, 42 % с работодателя
fn entry(
    id: &str,
    employee: &str,
    department: Department,
    month: u32,
    gross_salary: f64,
    status: PayrollStatus,
) -> PayrollEntry {
    PayrollEntry {
        id: id.to_string(),
        employee: employee.to_string(),
        department,
        period: ymd(2024, month, 1),
        gross_salary,
        employee_contributions: (gross_salary * 22.0).round() / 100.0,
        employer_contributions: (gross_salary * 42.0).round() / 100.0,
        status,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<PayrollEntry> {
    use Department::*;
    use PayrollStatus::*;
    vec![
        entry("1", "Luc Martin", Operations, 4, 3_200.0, Paid),
        entry("2", "Claire Fontaine", Finance, 4, 3_650.0, Paid),
        entry("3", "Nadia Benali", HumanResources, 4, 2_950.0, Paid),
        entry("4", "Thomas Leroy", Operations, 5, 2_450.0, Validated),
        entry("5", "Julie Morel", Sales, 5, 2_300.0, Validated),
        entry("6", "Paul Girard", Finance, 5, 4_100.0, Draft),
        entry("7", "Luc Martin", Operations, 5, 3_200.0, Draft),
    ]
}
