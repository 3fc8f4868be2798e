//! Group repository for JSON storage
//!
//! Manages loading and saving groups to groups.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GroupSplitError;
use crate::models::{Group, GroupId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable group data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GroupData {
    groups: Vec<Group>,
}

/// Repository for group persistence
pub struct GroupRepository {
    path: PathBuf,
    data: RwLock<HashMap<GroupId, Group>>,
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load groups from disk
    pub fn load(&self) -> Result<(), GroupSplitError> {
        let file_data: GroupData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for group in file_data.groups {
            data.insert(group.id, group);
        }

        Ok(())
    }

    /// Save groups to disk
    pub fn save(&self) -> Result<(), GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let file_data = GroupData { groups };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> Result<Option<Group>, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all groups, sorted by name
    pub fn get_all(&self) -> Result<Vec<Group>, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(groups)
    }

    /// Find a group by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Group>, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|g| g.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Check if a group name is taken, ignoring `exclude_id`
    pub fn name_exists(&self, name: &str, exclude_id: Option<GroupId>) -> Result<bool, GroupSplitError> {
        Ok(self
            .get_by_name(name)?
            .is_some_and(|g| Some(g.id) != exclude_id))
    }

    /// Insert or update a group
    pub fn upsert(&self, group: Group) -> Result<(), GroupSplitError> {
        let mut data = self.data.write().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(group.id, group);
        Ok(())
    }

    /// Count groups
    pub fn count(&self) -> Result<usize, GroupSplitError> {
        let data = self.data.read().map_err(|e| {
            GroupSplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
