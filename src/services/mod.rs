//! Service layer for GroupSplit
//!
//! The service layer provides business logic on top of the storage layer:
//! split resolution, balance aggregation, settlement planning, and the
//! validated group and expense operations used by the CLI.

pub mod balance;
pub mod expense;
pub mod group;
pub mod settlement;
pub mod split;

pub use balance::compute_balances;
pub use expense::{ExpenseService, NewExpense};
pub use group::GroupService;
pub use settlement::{plan_settlements, SettlementReport, SettlementService};
pub use split::{resolve_equal_split, resolve_shares};
