//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{StoreConfig, CONFIG_DIR_ENV};

impl StoreConfig {
    /// Resolve the store location from the environment
    ///
    /// Priority:
    /// 1. `CDS_CONFIG_DIR` (relative values are resolved against the current directory)
    /// 2. Home directory
    ///
    /// # Errors
    /// Returns an error if neither the override nor the home directory is available
    pub fn resolve() -> Result<Self> {
        if let Some(root) = Self::root_from_env()? {
            return Ok(Self::new(root));
        }

        let Some(home) = dirs::home_dir() else {
            anyhow::bail!(
                "Could not determine home directory. \
                 Please set the HOME environment variable or {CONFIG_DIR_ENV}."
            );
        };

        Ok(Self::new(home))
    }

    /// Read the override root, ignoring an empty value
    fn root_from_env() -> Result<Option<PathBuf>> {
        let Some(value) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        let path = PathBuf::from(value);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        let cwd = std::env::current_dir()
            .with_context(|| format!("Failed to resolve relative {CONFIG_DIR_ENV}"))?;
        Ok(Some(cwd.join(path)))
    }
}
