//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GroupSplitError;
use crate::models::{Expense, ExpenseId, GroupId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with a per-group index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: group_id -> expense_ids
    by_group: RwLock<HashMap<GroupId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_group: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the group index
    pub fn load(&self) -> Result<(), GroupSplitError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_group.clear();

        for expense in file_data.expenses {
            by_group.entry(expense.group_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_chronologically(&mut expenses);

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses of a group, oldest first
    pub fn get_by_group(&self, group_id: GroupId) -> Result<Vec<Expense>, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_group = self.by_group.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_group.get(&group_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_chronologically(&mut expenses);
        Ok(expenses)
    }

    /// Insert a new expense
    ///
    /// Expenses are immutable once recorded, so an existing id is rejected.
    pub fn insert(&self, expense: Expense) -> Result<(), GroupSplitError> {
        let mut data = self.data.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.contains_key(&expense.id) {
            return Err(GroupSplitError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        by_group.entry(expense.group_id).or_default().push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, GroupSplitError> {
        let mut data = self.data.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = data.remove(&id);
        if let Some(expense) = &removed {
            if let Some(ids) = by_group.get_mut(&expense.group_id) {
                ids.retain(|&eid| eid != id);
            }
        }
        Ok(removed)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

fn sort_chronologically(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}
