//! Storage initialization
//!
//! Handles first-run setup

use crate::config::paths::GroupSplitPaths;
use crate::error::GroupSplitError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and empty group and expense stores. Existing
/// data files are left untouched.
pub fn initialize_storage(paths: &GroupSplitPaths) -> Result<(), GroupSplitError> {
    paths.ensure_directories()?;

    if !paths.groups_file().exists() {
        write_json_atomic(paths.groups_file(), &serde_json::json!({ "groups": [] }))?;
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &serde_json::json!({ "expenses": [] }))?;
    }

    Ok(())
}
