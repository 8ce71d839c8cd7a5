//! Common utility functions for command handlers
//!
//! This module contains shared helper functions used across multiple commands.

use anyhow::{Context, Result};

use crate::config::StoreConfig;
use crate::service::ShortcutDirectory;
use crate::storage::JsonFileStorage;

/// Open the shortcut directory backed by the JSON store at `config`
#[must_use]
pub fn open_directory(config: &StoreConfig) -> ShortcutDirectory<JsonFileStorage> {
    ShortcutDirectory::new(JsonFileStorage::new(config))
}

/// Expand "." to the current working directory
///
/// Any other value is returned unchanged.
///
/// # Errors
/// Returns an error if the current directory cannot be determined
pub fn expand_current_dir(arg: &str) -> Result<String> {
    if arg != "." {
        return Ok(arg.to_string());
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_current_dir_dot() {
        let expanded = expand_current_dir(".").unwrap();
        assert_eq!(
            expanded,
            std::env::current_dir().unwrap().display().to_string()
        );
    }

    #[test]
    fn test_expand_current_dir_passthrough() {
        assert_eq!(expand_current_dir("proj").unwrap(), "proj");
        assert_eq!(expand_current_dir("./proj").unwrap(), "./proj");
        assert_eq!(expand_current_dir("/tmp").unwrap(), "/tmp");
    }

    #[test]
    fn test_open_directory_uses_config_root() {
        let temp = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(temp.path());
        let directory = open_directory(&config);

        directory.add("tmp", "/tmp").unwrap();
        assert!(config.store_file().exists());
        assert_eq!(directory.goto("tmp").unwrap(), "/tmp");
    }
}
