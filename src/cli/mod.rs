//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod group;
pub mod history;
pub mod settle;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, ExportFormat};
pub use group::{handle_group_command, GroupCommands};
pub use history::handle_history;
pub use settle::{handle_balances, handle_settle, handle_settle_file, handle_split, OutputFormat};
