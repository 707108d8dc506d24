//! Text shell for the rewind tic-tac-toe engine.
//!
//! Reads one intent per line (place a mark, jump through history, flip the
//! history list) and prints the board, status and history after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod intent;
mod order;
mod render;
mod shell;

pub use config::{ConfigError, ShellConfig};
pub use intent::{HELP, Intent, IntentError};
pub use order::HistoryOrder;
pub use render::{render_board, render_frame, render_history};
pub use shell::{Flow, Shell, ShellError, replay};
