mod cli;
mod color;
mod commands;
mod config;
mod domain;
mod error;
mod service;
mod storage;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::StoreConfig;
use error::ShortcutError;

fn main() {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    init_logging(color_mode);

    if let Err(err) = run(cli, color_mode) {
        eprintln!("{}", color::error(color_mode, format!("{err:#}")));
        std::process::exit(exit_code(&err));
    }
}

/// Diagnostics go to stderr; `CDS_LOG` overrides the default `warn` filter
fn init_logging(color_mode: color::ColorMode) {
    let filter =
        EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color_mode.should_colorize())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli, color_mode: color::ColorMode) -> Result<()> {
    let Some(command) = cli.command else {
        let Some(name) = cli.name else {
            anyhow::bail!("Provide a shortcut name or a subcommand. See `cds --help`");
        };
        return commands::goto::cmd_goto(&name, &StoreConfig::resolve()?);
    };

    match command {
        Commands::Add { name, path } => {
            commands::add::cmd_add(&name, &path, &StoreConfig::resolve()?, color_mode)
        }
        Commands::List => commands::list::cmd_list(&StoreConfig::resolve()?, color_mode),
        Commands::Delete { query } => {
            commands::delete::cmd_delete(&query, &StoreConfig::resolve()?, color_mode)
        }
        Commands::Check { query } => {
            commands::check::cmd_check(&query, &StoreConfig::resolve()?, color_mode)
        }
        Commands::Update { query, name, path } => commands::update::cmd_update(
            &query,
            name.as_deref(),
            path.as_deref(),
            &StoreConfig::resolve()?,
            color_mode,
        ),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
        Commands::ShellInit { shell } => commands::shell_init::cmd_shell_init(&shell),
    }
}

/// Map shortcut failures to their exit codes; anything else exits with 1
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ShortcutError>()
        .map_or(1, ShortcutError::exit_code)
}
