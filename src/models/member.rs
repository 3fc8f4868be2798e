//! Member identifiers
//!
//! A member is an opaque identifier for a person taking part in a group.
//! Members carry no state of their own; who belongs to which group is
//! recorded on the group itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GroupSplitError;

/// Opaque identifier of a group member
///
/// Ordered by its string value so it can key a `BTreeMap`, which keeps every
/// balance and share map iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Create a member id from any string, without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a member id from user input (trimmed, must be non-empty)
    pub fn parse(s: &str) -> Result<Self, GroupSplitError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GroupSplitError::Validation(
                "Member id cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MemberId {
    type Err = GroupSplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
