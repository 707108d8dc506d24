//! Render-ready snapshot of the engine.

use super::engine::GameEngine;
use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
///
/// Built fresh from the engine on every request; holding on to one does not
/// track later moves.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Current snapshot, row-major, `None` for empty squares.
    board: [Option<Mark>; 9],
    /// Status line text.
    status: String,
    /// Indices of the winning line, empty when nobody has won.
    highlighted: Vec<usize>,
    /// History-list labels, oldest first.
    moves: Vec<String>,
    /// Cursor into the history.
    current_move: usize,
    /// Number of recorded snapshots.
    history_len: usize,
    /// Full board and no winner.
    draw: bool,
}

impl GameView {
    pub(crate) fn from_engine(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().marks(),
            status: engine.status_text(),
            highlighted: engine.highlighted_cells(),
            moves: engine.move_descriptions(),
            current_move: engine.current_move(),
            history_len: engine.history_len(),
            draw: engine.is_draw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_view_mirrors_engine() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);

        let view = engine.view();
        assert_eq!(view.board()[4], Some(Mark::X));
        assert_eq!(view.status(), "Next player: O");
        assert!(view.highlighted().is_empty());
        assert_eq!(view.moves(), &vec!["Go to game start", "You are at move #1"]);
        assert_eq!(*view.current_move(), 1);
        assert_eq!(*view.history_len(), 2);
        assert!(!view.draw());
    }
}
