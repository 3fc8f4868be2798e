//! YAML Export functionality
//!
//! Exports a group to YAML for human-readable archiving.

use std::io::Write;

use crate::api::SettlementResponse;
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::export::json::GroupExport;
use crate::models::GroupId;
use crate::storage::Storage;

/// Export a group to YAML
pub fn export_group_yaml<W: Write>(
    storage: &Storage,
    group_id: GroupId,
    writer: &mut W,
) -> GroupSplitResult<()> {
    let export = GroupExport::from_storage(storage, group_id)?;

    writeln!(writer, "# GroupSplit export: {}", export.group.name)
        .map_err(|e| GroupSplitError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| GroupSplitError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| GroupSplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GroupSplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| GroupSplitError::Export(e.to_string()))?;

    Ok(())
}

/// Write a settlement response as YAML
pub fn write_settlement_yaml<W: Write>(
    response: &SettlementResponse,
    writer: &mut W,
) -> GroupSplitResult<()> {
    serde_yaml::to_writer(writer, response).map_err(|e| GroupSplitError::Export(e.to_string()))
}
