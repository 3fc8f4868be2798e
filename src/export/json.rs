//! JSON Export functionality
//!
//! Exports one group, its expenses and its settlement to JSON with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::api::SettlementResponse;
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, Group, GroupId, Money};
use crate::services::balance::with_roster;
use crate::services::SettlementService;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export of one group
#[derive(Debug, Clone, Serialize)]
pub struct GroupExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub group: Group,

    /// Expenses, oldest first
    pub expenses: Vec<Expense>,

    /// Balances and payments at export time, in major units
    pub settlement: SettlementResponse,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub member_count: usize,
    pub expense_count: usize,
    /// Sum of all expense amounts
    pub total_spent: Money,
    pub earliest_expense: Option<DateTime<Utc>>,
    pub latest_expense: Option<DateTime<Utc>>,
}

impl GroupExport {
    /// Build an export of a group from storage
    pub fn from_storage(storage: &Storage, group_id: GroupId) -> GroupSplitResult<Self> {
        let group = storage
            .groups
            .get(group_id)?
            .ok_or_else(|| GroupSplitError::group_not_found(group_id.to_string()))?;
        let expenses = storage.expenses.get_by_group(group_id)?;
        let report = SettlementService::new(storage).report(group_id)?;
        let balances = with_roster(report.balances, &group.members);
        let settlement = SettlementResponse::new(
            Some(group.id.as_uuid().to_string()),
            &balances,
            &report.plan,
        );

        let metadata = ExportMetadata {
            member_count: group.members.len(),
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.created_at).min(),
            latest_expense: expenses.iter().map(|e| e.created_at).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            group,
            expenses,
            settlement,
            metadata,
        })
    }
}

/// Export a group to JSON
pub fn export_group_json<W: Write>(
    storage: &Storage,
    group_id: GroupId,
    writer: &mut W,
    pretty: bool,
) -> GroupSplitResult<()> {
    let export = GroupExport::from_storage(storage, group_id)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| GroupSplitError::Export(e.to_string()))?;

    Ok(())
}

/// Write a settlement response as pretty JSON
pub fn write_settlement_json<W: Write>(
    response: &SettlementResponse,
    writer: &mut W,
) -> GroupSplitResult<()> {
    serde_json::to_writer_pretty(&mut *writer, response)
        .map_err(|e| GroupSplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GroupSplitError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GroupSplitPaths;
    use crate::models::MemberId;
    use crate::services::{ExpenseService, GroupService, NewExpense};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, GroupId) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let group = GroupService::new(&storage)
            .create("Trip", None, MemberId::from("A"), [MemberId::from("B")])
            .unwrap();
        ExpenseService::new(&storage)
            .add(
                group.id,
                NewExpense {
                    description: "Fuel".into(),
                    payer: MemberId::from("A"),
                    amount: Money::from_cents(5000),
                    split: None,
                    created_by: None,
                },
            )
            .unwrap();

        (temp_dir, storage, group.id)
    }

    #[test]
    fn test_json_export_shape() {
        let (_temp_dir, storage, group_id) = create_test_storage();

        let mut buffer = Vec::new();
        export_group_json(&storage, group_id, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["group"]["id"], group_id.as_uuid().to_string());
        assert_eq!(value["expenses"].as_array().unwrap().len(), 1);
        assert_eq!(value["metadata"]["total_spent"], 5000);
        assert_eq!(value["settlement"]["balances"]["A"], 25.0);
        assert_eq!(value["settlement"]["settlements"][0]["from"], "B");
    }

    #[test]
    fn test_export_lists_idle_members() {
        let (_temp_dir, storage, group_id) = create_test_storage();
        GroupService::new(&storage)
            .add_member(group_id, MemberId::from("C"))
            .unwrap();

        let export = GroupExport::from_storage(&storage, group_id).unwrap();
        assert_eq!(export.settlement.balances.len(), 3);
        assert_eq!(export.settlement.balances["C"], 0.0);
        assert_eq!(export.settlement.settlements.len(), 1);
    }

    #[test]
    fn test_export_unknown_group() {
        let (_temp_dir, storage, _group_id) = create_test_storage();
        let mut buffer = Vec::new();
        let err = export_group_json(&storage, GroupId::new(), &mut buffer, false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_settlement_json() {
        let (_temp_dir, storage, group_id) = create_test_storage();
        let report = SettlementService::new(&storage).report(group_id).unwrap();

        let mut buffer = Vec::new();
        write_settlement_json(&SettlementResponse::from(&report), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["settlements"][0]["amount"], 25.0);
    }
}
