pub mod confirm_dialog;
pub mod filter_panel;
pub mod record_detail;
pub mod record_table;
pub mod stat_card;
pub mod ui;
