//! Add command - Create a new shortcut

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::commands::common::{expand_current_dir, open_directory};
use crate::config::StoreConfig;
use crate::domain::shortcut::display_path;

/// Create a shortcut named `name` pointing at `path`
///
/// # Errors
/// Returns an error if:
/// - The name is empty or already taken
/// - The path already has a shortcut
/// - The store cannot be written
pub fn cmd_add(
    name: &str,
    path: &str,
    config: &StoreConfig,
    color_mode: color::ColorMode,
) -> Result<()> {
    let path = expand_current_dir(path)?;
    let entry = open_directory(config).add(name, &path)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Added shortcut {} {}",
                color_mode.colorize_name(&entry.name),
                color::dim(color_mode, display_path(Path::new(&entry.path)))
            )
        )
    );

    Ok(())
}
