//! CLI command for exporting a group

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{GroupSplitError, GroupSplitResult};
use crate::export::{csv, json, yaml};
use crate::services::GroupService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense shares only)
    Csv,
    /// JSON format (group, expenses and settlement)
    Json,
    /// YAML format (group, expenses and settlement, human-readable)
    Yaml,
}

/// Export a group to a file
pub fn handle_export(
    storage: &Storage,
    group: &str,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> GroupSplitResult<()> {
    let group = GroupService::new(storage).require(group)?;

    let file = File::create(output).map_err(|e| {
        GroupSplitError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_group_csv(storage, group.id, &mut writer)?;
            println!("Expenses of {} exported to: {}", group.name, output.display());
        }
        ExportFormat::Json => {
            json::export_group_json(storage, group.id, &mut writer, pretty)?;
            println!("{} exported to: {}", group.name, output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_group_yaml(storage, group.id, &mut writer)?;
            println!("{} exported to: {}", group.name, output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| GroupSplitError::Export(e.to_string()))
}
