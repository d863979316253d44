pub mod a001_contact;
pub mod a002_contract;
pub mod a003_cost_center;
pub mod a004_invoice;
pub mod a005_tax_declaration;
pub mod a006_compliance_item;
pub mod a007_payroll_entry;
pub mod a008_work_schedule;
pub mod a009_stock_item;
