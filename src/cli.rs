// CommandFactory is used by tests via Cli::command()
#[allow(unused_imports)]
use clap::CommandFactory;

use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;

use crate::config::StoreConfig;
use crate::storage::JsonFileStorage;

/// Directory bookmarking tool
///
/// Run `cds <name>` to print the directory of a shortcut. With the shell
/// integration from `cds shell-init`, this changes into it.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    /// Shortcut name (or stored path) to jump to
    #[arg(value_name = "NAME", add = ArgValueCompleter::new(list_shortcut_names))]
    pub name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new shortcut
    Add {
        /// Shortcut name
        #[arg(short, long)]
        name: String,
        /// Target directory ("." for the current directory)
        #[arg(short, long, default_value = ".")]
        path: String,
    },
    /// List all your shortcuts
    #[command(visible_alias = "ls")]
    List,
    /// Delete a shortcut entry by name or path
    #[command(visible_alias = "rm")]
    Delete {
        /// Shortcut name or path ("." for the current directory)
        #[arg(add = ArgValueCompleter::new(list_shortcut_names))]
        query: String,
    },
    /// Check if a name or path has a shortcut
    Check {
        /// Shortcut name or path ("." for the current directory)
        #[arg(add = ArgValueCompleter::new(list_shortcut_names))]
        query: String,
    },
    /// Update an existing entry
    Update {
        /// Shortcut name or path used to find the entry
        #[arg(add = ArgValueCompleter::new(list_shortcut_names))]
        query: String,
        /// New shortcut name
        #[arg(short, long)]
        name: Option<String>,
        /// New target directory ("." for the current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
    /// Generate shell integration script
    ShellInit {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// List shortcut names for completion
///
/// Returns empty Vec if the store location cannot be resolved or read.
/// Each candidate carries its path as help text.
#[must_use]
pub fn list_shortcut_names(current: &OsStr) -> Vec<CompletionCandidate> {
    let Ok(config) = StoreConfig::resolve() else {
        return Vec::new();
    };

    let Ok(store) = JsonFileStorage::new(&config).try_load() else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    store
        .iter()
        .filter(|entry| entry.name.starts_with(&*prefix))
        .map(|entry| CompletionCandidate::new(entry.name).help(Some(entry.path.into())))
        .collect()
}
