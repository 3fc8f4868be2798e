//! Configuration module for GroupSplit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GroupSplitPaths;
pub use settings::Settings;
