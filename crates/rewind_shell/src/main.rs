//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_shell::{HistoryOrder, Shell, ShellConfig, render_frame, replay};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config)?;

    match cli.command {
        Command::Play { reversed } => run_play(config, reversed),
        Command::Replay { cells, jump, json } => run_replay(&config, &cells, jump, json),
    }
}

/// Sends logs to the configured file, or stderr, so they stay out of the board output.
fn initialize_tracing(config: &ShellConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}

/// Run the interactive shell
#[instrument(skip(config))]
fn run_play(config: ShellConfig, reversed: bool) -> Result<()> {
    let config = if reversed {
        config.with_history_order(HistoryOrder::Reversed)
    } else {
        config
    };

    let mut shell = Shell::new(*config.history_order(), config.prompt().clone());
    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Replay a move sequence and print the result
#[instrument(skip(config))]
fn run_replay(config: &ShellConfig, cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let engine = replay(cells, jump)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&engine.view())?);
    } else {
        println!("{}", render_frame(&engine, *config.history_order()));
    }
    Ok(())
}
