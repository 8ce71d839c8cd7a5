//! Shell init command - Generate shell integration scripts

use anyhow::Result;

/// Shell integration script for `shell`
///
/// # Errors
/// Returns an error if the shell is not supported
pub fn shell_init_script(shell: &str) -> Result<&'static str> {
    match shell {
        "bash" => Ok(include_str!("../../templates/bash.sh")),
        "zsh" => Ok(include_str!("../../templates/zsh.sh")),
        "fish" => Ok(include_str!("../../templates/fish.fish")),
        _ => anyhow::bail!("Invalid shell: {shell}. Supported shells: bash, zsh, fish"),
    }
}

/// Generate shell integration script
///
/// # Errors
/// Returns an error if invalid shell is specified
pub fn cmd_shell_init(shell: &str) -> Result<()> {
    print!("{}", shell_init_script(shell)?);
    Ok(())
}
