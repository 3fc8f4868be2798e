//! GroupSplit - shared expense balances and settlements
//!
//! This library records who paid for a group's shared expenses and how each
//! cost is divided, then derives every member's net balance and a short list
//! of payments that settles the group.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, members, groups, expenses, settlements)
//! - `services`: Split resolution, balance aggregation, settlement planning,
//!   and the group and expense services
//! - `storage`: JSON file storage and the `LedgerReader` seam
//! - `api`: Wire-format expense records and settlement responses
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `groupsplit` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use groupsplit::models::{Balances, MemberId, Money};
//! use groupsplit::services::plan_settlements;
//!
//! let balances: Balances = [
//!     (MemberId::from("A"), Money::from_cents(200)),
//!     (MemberId::from("B"), Money::from_cents(-100)),
//!     (MemberId::from("C"), Money::from_cents(-100)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let plan = plan_settlements(&balances);
//! assert_eq!(plan.settlements.len(), 2);
//! assert!(plan.is_complete());
//! ```

pub mod api;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{GroupSplitError, GroupSplitResult};
