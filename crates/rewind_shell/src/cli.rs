//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Show the history list newest first
        #[arg(long)]
        reversed: bool,
    },

    /// Apply a sequence of cells and print the resulting game
    Replay {
        /// Cells (0-8) in play order
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the render view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
