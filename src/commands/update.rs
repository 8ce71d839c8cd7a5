//! Update command - Rename or re-path an existing shortcut

use anyhow::Result;

use crate::color;
use crate::commands::common::{expand_current_dir, open_directory};
use crate::config::StoreConfig;
use crate::error::ShortcutError;

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Update the shortcut a query resolves to
///
/// # Errors
/// Returns an error if:
/// - Neither a new name nor a new path is given (checked before the lookup)
/// - The query matches no shortcut
/// - The new name is already taken
/// - Nothing would change
/// - The store cannot be written
pub fn cmd_update(
    query: &str,
    name: Option<&str>,
    path: Option<&str>,
    config: &StoreConfig,
    color_mode: color::ColorMode,
) -> Result<()> {
    if is_blank(name) && is_blank(path) {
        return Err(ShortcutError::NoChangeRequested {
            query: query.to_string(),
        }
        .into());
    }

    let path = path.map(expand_current_dir).transpose()?;
    let outcome = open_directory(config).update(query, name, path.as_deref())?;

    if outcome.renamed() {
        eprintln!(
            "{}",
            color::success(
                color_mode,
                format!(
                    "Renamed {} to {}",
                    color_mode.colorize_name(&outcome.before.name),
                    color_mode.colorize_name(&outcome.after.name)
                )
            )
        );
    }

    if let Some(other) = &outcome.shares_path_with {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!(
                    "Path {} is already assigned to another shortcut: {}",
                    outcome.after.path,
                    color_mode.colorize_name(other)
                )
            )
        );
    }

    if outcome.repathed() {
        eprintln!(
            "{}",
            color::success(
                color_mode,
                format!(
                    "Path for {} updated from {} to {}",
                    color_mode.colorize_name(&outcome.after.name),
                    color::dim(color_mode, &outcome.before.path),
                    outcome.after.path
                )
            )
        );
    } else {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                format!("Path remains {}", color::dim(color_mode, &outcome.after.path))
            )
        );
    }

    Ok(())
}
