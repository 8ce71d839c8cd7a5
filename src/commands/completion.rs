//! Completion command - Print dynamic completion setup for a shell

use anyhow::Result;
use clap_complete::Shell;

/// Setup snippet that registers `cds` dynamic completion in `shell`
///
/// Completion also covers the `cds` function from `shell-init`, since both
/// share the command name.
///
/// # Errors
/// Returns an error for shells other than bash, zsh and fish
pub fn completion_setup(shell: &str) -> Result<String> {
    let parsed = shell.parse::<Shell>().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    let (rc_file, source_line) = match parsed {
        Shell::Bash => ("~/.bashrc", "source <(COMPLETE=bash cds)"),
        Shell::Zsh => ("~/.zshrc", "source <(COMPLETE=zsh cds)"),
        Shell::Fish => (
            "~/.config/fish/config.fish",
            "source (COMPLETE=fish cds | psub)",
        ),
        _ => anyhow::bail!("Unsupported shell: {shell}"),
    };

    Ok(format!(
        "# cds shell completion setup for {parsed}\n# Add this to your {rc_file}:\n{source_line}\n"
    ))
}

/// Generate shell completion setup instructions
///
/// # Errors
/// Returns an error if an unsupported shell is specified
pub fn cmd_completion(shell: &str) -> Result<()> {
    print!("{}", completion_setup(shell)?);
    Ok(())
}
