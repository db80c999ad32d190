pub mod fact;
pub mod ui;
