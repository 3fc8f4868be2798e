//! Audit log records
//!
//! One record per change to a group or expense, carrying JSON snapshots of
//! the entity around the change.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.past_tense())
    }
}

/// What kind of record changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Group,
    Expense,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Group => "group",
            EntityType::Expense => "expense",
        })
    }
}

/// A single change in the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Group name or expense description at the time of the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Short field-by-field summary, for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

fn snapshot<T: Serialize>(entity: &T) -> Option<Value> {
    serde_json::to_value(entity).ok()
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        label: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            label,
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: snapshot(entity),
            ..Self::record(Operation::Create, entity_type, entity_id.into(), label)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
        changes: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            changes,
            ..Self::record(Operation::Update, entity_type, entity_id.into(), label)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: snapshot(entity),
            ..Self::record(Operation::Delete, entity_type, entity_id.into(), label)
        }
    }
}

/// One history line, plus an indented line of changes for updates
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(label) = &self.label {
            write!(f, " \"{}\"", label)?;
        }
        if let Some(changes) = &self.changes {
            write!(f, "\n    {}", changes)?;
        }
        Ok(())
    }
}
