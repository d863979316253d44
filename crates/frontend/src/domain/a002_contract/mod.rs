pub mod sample;
pub mod ui;
