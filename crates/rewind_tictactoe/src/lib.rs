//! Rewind tic-tac-toe engine.
//!
//! A two-player 3x3 game with a full record of every position reached and
//! the ability to jump back to any of them. Playing from an earlier position
//! overwrites the moves that followed it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::Center);
//! engine.apply_move(Position::TopLeft);
//! assert_eq!(engine.status_text(), "Next player: X");
//!
//! engine.jump_to(1).unwrap();
//! engine.apply_move(Position::BottomRight);
//! assert_eq!(engine.history_len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use engine::{GameEngine, MoveOutcome, Status, describe_move};
pub use error::EngineError;
pub use position::Position;
pub use rules::{WinningLine, calculate_winner};
pub use types::{Board, Mark, Square};
pub use view::GameView;
