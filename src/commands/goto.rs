//! Goto command - Resolve a shortcut to its directory

use anyhow::Result;

use crate::commands::common::open_directory;
use crate::config::StoreConfig;

/// Print the directory of a shortcut on stdout
///
/// The shell integration from `shell-init` changes into the printed path.
///
/// # Errors
/// Returns an error if the name resolves to no shortcut
pub fn cmd_goto(name: &str, config: &StoreConfig) -> Result<()> {
    let path = open_directory(config).goto(name)?;
    println!("{path}");
    Ok(())
}
