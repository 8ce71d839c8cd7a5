//! Configuration module
//!
//! Resolves where the shortcut store lives. The location is computed once at
//! startup and passed down explicitly.

pub mod loader;

use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration root
pub const CONFIG_DIR_ENV: &str = "CDS_CONFIG_DIR";

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "CDS_LOG";

/// Directory created under the configuration root
pub const APP_DIR_NAME: &str = ".cds";

/// File holding the shortcut mapping
pub const STORE_FILE_NAME: &str = "shortcuts.json";

/// Location of the shortcut store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    root: PathBuf,
}

impl StoreConfig {
    /// Build a config rooted at `root` (the directory that holds `.cds/`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/.cds`
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(APP_DIR_NAME)
    }

    /// `<root>/.cds/shortcuts.json`
    #[must_use]
    pub fn store_file(&self) -> PathBuf {
        self.store_dir().join(STORE_FILE_NAME)
    }
}
