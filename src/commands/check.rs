//! Check command - Report whether a name or path has a shortcut

use anyhow::Result;

use crate::color;
use crate::commands::common::{expand_current_dir, open_directory};
use crate::config::StoreConfig;
use crate::domain::shortcut::format_shortcut_table;

/// Resolve a query and print the matching shortcut
///
/// # Errors
/// Returns an error if the query matches no shortcut
pub fn cmd_check(query: &str, config: &StoreConfig, color_mode: color::ColorMode) -> Result<()> {
    let query = expand_current_dir(query)?;
    let entry = open_directory(config).find(&query)?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Found a shortcut for {query}"))
    );
    for line in format_shortcut_table(&[entry], false, color_mode) {
        println!("{line}");
    }

    Ok(())
}
