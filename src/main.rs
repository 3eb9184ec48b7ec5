// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => {
            let config = cli.config.unwrap_or_else(spacman::model::default_want_list_path);
            if cli.query {
                commands::cmd_query(&config)
            } else {
                commands::cmd_sync(commands::SyncOptions {
                    config: &config,
                    snapshot: cli.snapshot.as_deref(),
                    pacman: &cli.pacman,
                    apply: cli.apply,
                    json: cli.json,
                })
            }
        }
    }
}
