//! List command - Display all shortcuts

use anyhow::Result;
use std::io::IsTerminal;

use crate::color;
use crate::commands::common::open_directory;
use crate::config::StoreConfig;
use crate::domain::shortcut::format_shortcut_table;

/// List all shortcuts
///
/// Interactive output abbreviates paths under the home directory; piped
/// output prints stored paths verbatim.
///
/// # Errors
/// This command does not fail; an unreadable store lists as empty
pub fn cmd_list(config: &StoreConfig, color_mode: color::ColorMode) -> Result<()> {
    let entries = open_directory(config).list();

    if entries.is_empty() {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                "No shortcuts yet. Add one with `cds add -n <name> -p <path>`"
            )
        );
        return Ok(());
    }

    let is_interactive = std::io::stdout().is_terminal();
    for line in format_shortcut_table(&entries, is_interactive, color_mode) {
        println!("{line}");
    }

    Ok(())
}
