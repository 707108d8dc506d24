//! Interactive line shell driving the engine.

use crate::intent::{HELP, Intent, IntentError};
use crate::order::HistoryOrder;
use crate::render::{render_frame, render_history};
use derive_more::{Display, Error, From};
use rewind_tictactoe::{EngineError, GameEngine, MoveOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Failure that ends the shell loop.
#[derive(Debug, Display, Error, From)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
    /// The view could not be encoded.
    #[display("JSON error: {}", _0)]
    Json(serde_json::Error),
}

/// The presentation side of the game: owns the engine and the list order.
#[derive(Debug, Clone)]
pub struct Shell {
    engine: GameEngine,
    order: HistoryOrder,
    prompt: String,
}

impl Shell {
    /// Creates a shell around a fresh engine.
    #[instrument]
    pub fn new(order: HistoryOrder, prompt: String) -> Self {
        Self {
            engine: GameEngine::new(),
            order,
            prompt,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current history list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Reads intents from `input` until `quit` or end of input.
    ///
    /// Unparseable lines and out-of-range jumps are reported on `out` and
    /// the loop continues.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ShellError> {
        info!("Shell started");
        writeln!(out, "{}\n", render_frame(&self.engine, self.order))?;
        write!(out, "{}", self.prompt)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Intent>() {
                Ok(intent) => self.execute(intent, &mut out)?,
                Err(IntentError::Empty) => Flow::Continue,
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(out, "{}. Type 'help' for commands.", e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }

        info!(
            history_len = self.engine.history_len(),
            current_move = self.engine.current_move(),
            "Shell finished"
        );
        Ok(())
    }

    /// Applies one intent and writes the response.
    #[instrument(skip(self, out))]
    pub fn execute<W: Write>(&mut self, intent: Intent, out: &mut W) -> Result<Flow, ShellError> {
        match intent {
            Intent::Move(pos) => {
                match self.engine.apply_move(pos) {
                    MoveOutcome::Placed(_) => {}
                    MoveOutcome::Occupied => writeln!(out, "{} is already taken.", pos)?,
                    MoveOutcome::GameDecided => {
                        writeln!(out, "The game is decided. Jump back to play on.")?
                    }
                }
                writeln!(out, "{}\n", render_frame(&self.engine, self.order))?;
            }
            Intent::Jump(index) => match self.engine.jump_to(index) {
                Ok(()) => writeln!(out, "{}\n", render_frame(&self.engine, self.order))?,
                Err(e) => {
                    warn!(error = %e, "Rejected jump");
                    writeln!(out, "{}.", e)?;
                }
            },
            Intent::Toggle => {
                self.order = self.order.toggled();
                debug!(order = ?self.order, "History order toggled");
                writeln!(out, "History:\n{}\n", render_history(&self.engine, self.order))?;
            }
            Intent::View => {
                let json = serde_json::to_string_pretty(&self.engine.view())?;
                writeln!(out, "{}", json)?;
            }
            Intent::Help => writeln!(out, "{}", HELP)?,
            Intent::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Plays `cells` in order from a fresh engine, then optionally jumps.
///
/// Rejected moves (occupied squares, moves after a win) are skipped the way
/// the interactive shell skips them.
///
/// # Errors
///
/// Returns the engine error for a cell outside 0-8 or an out-of-range jump.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>) -> Result<GameEngine, EngineError> {
    let mut engine = GameEngine::new();
    for (n, &cell) in cells.iter().enumerate() {
        let outcome = engine.apply_index(cell)?;
        if !outcome.is_placed() {
            warn!(n, cell, ?outcome, "Replay move skipped");
        }
    }
    if let Some(index) = jump {
        engine.jump_to(index)?;
    }
    Ok(engine)
}
