//! Append-only audit log
//!
//! Entries are stored one JSON object per line. Every append opens, writes
//! and flushes, so a log never holds a partial entry from an earlier run.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{GroupSplitError, GroupSplitResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> GroupSplitResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| GroupSplitError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| GroupSplitError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| GroupSplitError::Io(format!("Failed to append to audit log: {}", e)))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> GroupSplitResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| GroupSplitError::Io(format!("Failed to open audit log: {}", e)))?;

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(serde_json::from_str(&line).map_err(|e| {
                    GroupSplitError::Json(format!("Bad audit entry on line {}: {}", idx + 1, e))
                })),
                Err(e) => Some(Err(GroupSplitError::Io(format!(
                    "Failed to read audit log line {}: {}",
                    idx + 1,
                    e
                )))),
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> GroupSplitResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }

    pub fn entry_count(&self) -> GroupSplitResult<usize> {
        self.read_all().map(|entries| entries.len())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
