//! Group service
//!
//! Provides business logic for creating groups and managing their members.

use crate::audit::{diff_entities, EntityType};
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Group, GroupId, MemberId};
use crate::storage::Storage;

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new group with its creator and any initial members
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        created_by: MemberId,
        members: impl IntoIterator<Item = MemberId>,
    ) -> GroupSplitResult<Group> {
        let name = name.trim();

        if self.storage.groups.name_exists(name, None)? {
            return Err(GroupSplitError::Duplicate {
                entity_type: "Group",
                identifier: name.to_string(),
            });
        }

        let mut group = Group::new(name, created_by);
        if let Some(description) = description {
            group.description = description.trim().to_string();
        }
        for member in members {
            group.add_member(member);
        }

        group
            .validate()
            .map_err(|e| GroupSplitError::Validation(e.to_string()))?;

        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        )?;

        tracing::info!(group = %group.id, members = group.members.len(), "created group");
        Ok(group)
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> GroupSplitResult<Option<Group>> {
        self.storage.groups.get(id)
    }

    /// Find a group by name or ID
    pub fn find(&self, identifier: &str) -> GroupSplitResult<Option<Group>> {
        if let Some(group) = self.storage.groups.get_by_name(identifier)? {
            return Ok(Some(group));
        }

        match identifier.parse::<GroupId>() {
            Ok(id) => self.storage.groups.get(id),
            Err(_) => Ok(None),
        }
    }

    /// Find a group by name or ID, failing if it doesn't exist
    pub fn require(&self, identifier: &str) -> GroupSplitResult<Group> {
        self.find(identifier)?
            .ok_or_else(|| GroupSplitError::group_not_found(identifier))
    }

    /// List all groups
    pub fn list(&self) -> GroupSplitResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Add a member to a group
    ///
    /// Adding someone who is already a member leaves the group unchanged.
    pub fn add_member(&self, id: GroupId, member: MemberId) -> GroupSplitResult<Group> {
        let mut group = self
            .storage
            .groups
            .get(id)?
            .ok_or_else(|| GroupSplitError::group_not_found(id.to_string()))?;

        let before = group.clone();
        if !group.add_member(member) {
            return Ok(group);
        }

        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_update(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &before,
            &group,
            diff_entities(&before, &group),
        )?;

        Ok(group)
    }
}
