//! Widgets for the full-screen interface

mod inventory;
mod log;
mod status;

pub use inventory::InventoryWidget;
pub use log::{LogWidget, wrap_text};
pub use status::StatusWidget;
