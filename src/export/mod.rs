//! Export module for GroupSplit
//!
//! Writes groups and settlements out in several formats:
//! - CSV: settlements and per-member expense shares
//! - JSON: machine-readable group export and settlement responses
//! - YAML: human-readable group export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_group_csv, write_expenses_csv, write_settlements_csv};
pub use json::{export_group_json, write_settlement_json, GroupExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_group_yaml, write_settlement_yaml};
