//! Where a ledger lives on disk
//!
//! `GROUPSPLIT_DATA_DIR` wins when set. Otherwise the ledger sits under the
//! platform config directory: `$XDG_CONFIG_HOME/groupsplit`, then
//! `~/.config/groupsplit`, or `%APPDATA%\groupsplit` on Windows.

use std::path::PathBuf;

use crate::error::GroupSplitError;

/// Files of one ledger, all relative to a single root
#[derive(Debug, Clone)]
pub struct GroupSplitPaths {
    base_dir: PathBuf,
}

impl GroupSplitPaths {
    /// Paths rooted at the override or the platform default
    ///
    /// Fails with a config error when neither the override nor a home
    /// directory is available.
    pub fn new() -> Result<Self, GroupSplitError> {
        let base_dir = if let Ok(custom) = std::env::var("GROUPSPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Paths rooted at `base_dir`, ignoring the environment
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Settings and the audit log sit at the root
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn groups_file(&self) -> PathBuf {
        self.data_dir().join("groups.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Create the root and its `data/` subdirectory
    pub fn ensure_directories(&self) -> Result<(), GroupSplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GroupSplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GroupSplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// A ledger counts as initialized once its settings file is written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GroupSplitError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("groupsplit"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| GroupSplitError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("groupsplit"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GroupSplitError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| GroupSplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("groupsplit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("GROUPSPLIT_DATA_DIR", custom_path);

        let paths = GroupSplitPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var("GROUPSPLIT_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GroupSplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.groups_file(),
            temp_dir.path().join("data").join("groups.json")
        );
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
