use contracts::domain::a002_contract::{Contract, ContractKind, ContractStatus};

use crate::domain::ymd;

pub fn records() -> Vec<Contract> {
    vec![
        Contract {
            id: "1".to_string(),
            reference: "CT-2024-001".to_string(),
            title: "Fourniture de farine".to_string(),
            counterparty: "Moulins de Beauce".to_string(),
            kind: ContractKind::Purchase,
            status: ContractStatus::Active,
            start_date: ymd(2024, 1, 1),
            end_date: Some(ymd(2026, 12, 31)),
            annual_value: 48_000.0,
        },
        Contract {
            id: "2".to_string(),
            reference: "CT-2024-002".to_string(),
            title: "Livraison grande distribution".to_string(),
            counterparty: "Hyper Centre Lyon".to_string(),
            kind: ContractKind::Sale,
            status: ContractStatus::Active,
            start_date: ymd(2024, 3, 1),
            end_date: None,
            annual_value: 120_000.0,
        },
        Contract {
            id: "3".to_string(),
            reference: "CT-2024-003".to_string(),
            title: "Maintenance des fours".to_string(),
            counterparty: "Thermotech Services".to_string(),
            kind: ContractKind::Service,
            status: ContractStatus::Expired,
            start_date: ymd(2023, 6, 1),
            end_date: Some(ymd(2024, 5, 31)),
            annual_value: 6_500.0,
        },
        Contract {
            id: "4".to_string(),
            reference: "CT-2024-004".to_string(),
            title: "CDI boulanger".to_string(),
            counterparty: "Thomas Leroy".to_string(),
            kind: ContractKind::Employment,
            status: ContractStatus::Active,
            start_date: ymd(2024, 9, 2),
            end_date: None,
            annual_value: 29_400.0,
        },
        Contract {
            id: "5".to_string(),
            reference: "CT-2025-001".to_string(),
            title: "Location véhicule utilitaire".to_string(),
            counterparty: "Loca-Pro".to_string(),
            kind: ContractKind::Service,
            status: ContractStatus::Draft,
            start_date: ymd(2025, 2, 1),
            end_date: Some(ymd(2028, 1, 31)),
            annual_value: 7_200.0,
        },
        Contract {
            id: "6".to_string(),
            reference: "CT-2022-007".to_string(),
            title: "Approvisionnement emballages".to_string(),
            counterparty: "Cartonnages du Rhône".to_string(),
            kind: ContractKind::Purchase,
            status: ContractStatus::Terminated,
            start_date: ymd(2022, 4, 1),
            end_date: Some(ymd(2024, 2, 29)),
            annual_value: 11_800.0,
        },
    ]
}
