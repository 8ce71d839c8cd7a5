//! Delete command - Remove a shortcut by name or path

use anyhow::Result;

use crate::color;
use crate::commands::common::{expand_current_dir, open_directory};
use crate::config::StoreConfig;

/// Delete the shortcut a query resolves to
///
/// # Errors
/// Returns an error if:
/// - The query matches no shortcut
/// - The store cannot be written
pub fn cmd_delete(query: &str, config: &StoreConfig, color_mode: color::ColorMode) -> Result<()> {
    let query = expand_current_dir(query)?;
    let entry = open_directory(config).remove(&query)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Deleted shortcut {} {}",
                color_mode.colorize_name(&entry.name),
                color::dim(color_mode, &entry.path)
            )
        )
    );

    Ok(())
}
