//! JSON file helpers for the repositories
//!
//! Ledger files are replaced through a sibling temp file and a rename, so a
//! crash mid-write leaves the previous ledger intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::GroupSplitError;

fn storage_err(action: &str, path: &Path, err: impl std::fmt::Display) -> GroupSplitError {
    GroupSplitError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Load a JSON file, or `T::default()` when the file has not been written yet
pub fn read_json<T, P>(path: P) -> Result<T, GroupSplitError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_err("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Replace a JSON file in one step
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), GroupSplitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_err("create", dir, e))?;
    }

    // Must live in the same directory for the rename to be atomic
    let staging = path.with_extension("json.tmp");

    let result = (|| {
        let file = File::create(&staging).map_err(|e| storage_err("create", &staging, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_err("serialize", path, e))?;
        writer.flush().map_err(|e| storage_err("flush", &staging, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_err("sync", &staging, e))?;
        fs::rename(&staging, path).map_err(|e| storage_err("replace", path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}
