//! Audit logging system for GroupSplit
//!
//! Records every create, update and delete of groups and expenses in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one logged operation with timestamp, entity information
//!   and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.
//! - `generate_diff`: short human-readable summary of what changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use groupsplit::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Group, group.id.to_string(), Some(group.name.clone()), &group);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{diff_entities, generate_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
