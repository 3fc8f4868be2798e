//! Group model
//!
//! A group is a named set of members who share expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GroupId;
use super::member::MemberId;

/// A group of members sharing expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Group name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Members in the order they joined
    #[serde(default)]
    pub members: Vec<MemberId>,

    /// Member who created the group
    pub created_by: MemberId,

    /// When the group was created
    pub created_at: DateTime<Utc>,

    /// When the group was last modified
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group; the creator is its first member
    pub fn new(name: impl Into<String>, created_by: MemberId) -> Self {
        let now = Utc::now();
        Self {
            id: GroupId::new(),
            name: name.into(),
            description: String::new(),
            members: vec![created_by.clone()],
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a member belongs to this group
    pub fn has_member(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }

    /// Add a member; returns false if they were already present
    pub fn add_member(&mut self, member: MemberId) -> bool {
        if self.has_member(&member) {
            return false;
        }
        self.members.push(member);
        self.updated_at = Utc::now();
        true
    }

    /// Validate the group
    pub fn validate(&self) -> Result<(), GroupValidationError> {
        if self.name.trim().is_empty() {
            return Err(GroupValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(GroupValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Group name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for GroupValidationError {}
