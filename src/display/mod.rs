//! Display formatting for terminal output
//!
//! Formats groups, expenses, balances and settlement plans for the CLI.
//! Amounts are shown with the configured currency symbol.

pub mod balance;
pub mod expense;
pub mod group;
pub mod settlement;

pub use balance::{balance_status, format_balances};
pub use expense::{format_expense_details, format_expense_list, format_shares};
pub use group::{format_group_details, format_group_list};
pub use settlement::format_settlement_plan;
