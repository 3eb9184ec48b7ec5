// src/cli.rs

//! CLI definitions for spacman
//!
//! This module contains the command-line interface definition using clap.
//! The actual command implementations are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spacman")]
#[command(author = "Spacman Contributors")]
#[command(version)]
#[command(
    about = "Keep installed pacman packages in sync with a declared list",
    long_about = None
)]
pub struct Cli {
    /// Want-list file (plain list, or a model file ending in .toml)
    #[arg(short, long, env = "SPACMAN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Package manager command used with --apply
    #[arg(
        short,
        long,
        env = "SPACMAN_PACMAN",
        value_name = "CMD",
        default_value = spacman::DEFAULT_PACKAGE_MANAGER
    )]
    pub pacman: String,

    /// Remove and install packages to match the want list
    #[arg(short, long, conflicts_with = "query")]
    pub apply: bool,

    /// Print the wanted packages and exit
    #[arg(short, long)]
    pub query: bool,

    /// Read saved `pacman -Qi` output instead of querying pacman
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Print the plan and diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
