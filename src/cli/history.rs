//! CLI command for the audit history

use crate::error::GroupSplitResult;
use crate::storage::Storage;

/// Print the most recent audit entries, newest last
pub fn handle_history(storage: &Storage, limit: usize) -> GroupSplitResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }
    Ok(())
}
