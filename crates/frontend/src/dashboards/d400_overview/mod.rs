pub mod kpi;
pub mod ui;
