//! Core data models for GroupSplit
//!
//! This module contains the data structures that represent the shared
//! expense domain: groups, members, expenses, balances and settlements.

pub mod expense;
pub mod group;
pub mod ids;
pub mod member;
pub mod money;
pub mod settlement;

pub use expense::{Expense, ExpenseValidationError, Shares, Split};
pub use group::{Group, GroupValidationError};
pub use ids::{ExpenseId, GroupId};
pub use member::MemberId;
pub use money::{Money, MoneyParseError};
pub use settlement::{Balances, Settlement, SettlementPlan};
