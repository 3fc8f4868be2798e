//! Storage layer for GroupSplit
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the `LedgerReader` seam the settlement engine reads
//! through.

pub mod expenses;
pub mod file_io;
pub mod groups;
pub mod init;
pub mod ledger;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use groups::GroupRepository;
pub use init::initialize_storage;
pub use ledger::LedgerReader;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::GroupSplitPaths;
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, GroupId};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GroupSplitPaths,
    pub groups: GroupRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GroupSplitPaths) -> Result<Self, GroupSplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            groups: GroupRepository::new(paths.groups_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GroupSplitPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), GroupSplitError> {
        self.groups.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> GroupSplitResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, label, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
        changes: Option<String>,
    ) -> GroupSplitResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            label,
            before,
            after,
            changes,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> GroupSplitResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, label, entity))
    }
}

impl LedgerReader for Storage {
    fn expenses_for_group(&self, group_id: GroupId) -> GroupSplitResult<Vec<Expense>> {
        self.expenses.get_by_group(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemberId, Money, Split};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_ledger_reader_returns_group_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let group_id = GroupId::new();
        let expense = Expense::new(
            group_id,
            "Pizza",
            MemberId::from("alice"),
            Money::from_cents(2000),
            Split::equal([MemberId::from("alice"), MemberId::from("bob")]),
        );
        storage.expenses.insert(expense).unwrap();

        let ledger: &dyn LedgerReader = &storage;
        assert_eq!(ledger.expenses_for_group(group_id).unwrap().len(), 1);
        assert!(ledger.expenses_for_group(GroupId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_log_create_appends_audit_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::Group, "grp-1", Some("Trip".into()), &"payload")
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
