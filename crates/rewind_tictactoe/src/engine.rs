//! Game engine with move history and time travel.
//!
//! The engine keeps every board snapshot since the start of the game and a
//! cursor (`current_move`) into that history. Everything a renderer shows
//! (status, turn, highlighted line) is derived from the snapshot under the
//! cursor on each call.

use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules::{WinningLine, calculate_winner, is_draw};
use super::types::{Board, Mark};
use super::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Result of asking the engine to place a mark.
///
/// Rejections are normal game flow and leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot recorded.
    Placed(Mark),
    /// The square is already taken in the current snapshot.
    Occupied,
    /// The current snapshot already has a winner.
    GameDecided,
}

impl MoveOutcome {
    /// Whether the move changed the engine.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}

/// Status line for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Game still open; this mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Tic-tac-toe engine with time-travel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: Vec<Board>,
    current_move: usize,
}

impl GameEngine {
    /// Creates an engine holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Occupied squares and decided games are silent no-ops. When the cursor
    /// is behind the end of history, the snapshots after it are discarded
    /// before the new one is appended.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = self.board();

        if calculate_winner(current).is_some() {
            debug!("Move rejected: game already decided");
            return MoveOutcome::GameDecided;
        }
        if !current.is_empty(pos) {
            debug!("Move rejected: square occupied");
            return MoveOutcome::Occupied;
        }

        let mark = self.to_move();
        let next = current.with_mark(pos, mark);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            info!(discarded, "Discarding abandoned future snapshots");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(%mark, current_move = self.current_move, "Move placed");
        debug_assert!(EngineInvariants::check_all(self).is_ok());
        MoveOutcome::Placed(mark)
    }

    /// Like [`apply_move`](Self::apply_move) but takes a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `index` is not 0-8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            EngineError::CellOutOfRange(index)
        })?;
        Ok(self.apply_move(pos))
    }

    /// Moves the cursor to `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `move_index` is not a
    /// recorded snapshot. The cursor is left where it was.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), EngineError> {
        if move_index >= self.history.len() {
            warn!("Jump target out of range");
            return Err(EngineError::InvalidIndex {
                index: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        debug!("Cursor moved");
        debug_assert!(EngineInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Snapshot under the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Every recorded snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot under the cursor.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Mark that plays next from the current snapshot.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Completed line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        calculate_winner(self.board())
    }

    /// Board indices to highlight: the winning line, or nothing.
    pub fn highlighted_cells(&self) -> Vec<usize> {
        self.winning_line()
            .map(|line| line.indices().to_vec())
            .unwrap_or_default()
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> Status {
        match self.winning_line() {
            Some(line) => Status::Winner(line.mark()),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Status line text, e.g. `"Next player: X"` or `"Winner: O"`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Whether the current snapshot is a full board with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self.board())
    }

    /// Positions the next player may take.
    ///
    /// Empty once the current snapshot is decided.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.winning_line().is_some() {
            return Vec::new();
        }
        Position::empty_on(self.board())
    }

    /// Label for every history entry, oldest first.
    pub fn move_descriptions(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|m| describe_move(m, self.current_move))
            .collect()
    }

    /// Everything a renderer needs for the current snapshot.
    pub fn view(&self) -> GameView {
        GameView::from_engine(self)
    }

    /// Builds an engine from raw parts without any checks.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// History-list label for entry `m` while the cursor sits at `current`.
pub fn describe_move(m: usize, current: usize) -> String {
    if m == current {
        format!("You are at move #{}", m)
    } else if m > 0 {
        format!("Go to move #{}", m)
    } else {
        "Go to game start".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, cells: &[usize]) {
        for &cell in cells {
            engine.apply_index(cell).expect("cell in range");
        }
    }

    #[test]
    fn test_new_engine_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.history_len(), 1);
        assert_eq!(engine.current_move(), 0);
        assert!(engine.board().is_blank());
        assert_eq!(engine.status_text(), "Next player: X");
        assert_eq!(engine.move_descriptions(), vec!["You are at move #0"]);
    }

    #[test]
    fn test_apply_move_alternates_marks() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(Position::Center), MoveOutcome::Placed(Mark::X));
        assert_eq!(engine.apply_move(Position::TopLeft), MoveOutcome::Placed(Mark::O));
        assert_eq!(engine.current_move(), 2);
        assert_eq!(engine.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);
        let before = engine.clone();

        assert_eq!(engine.apply_move(Position::Center), MoveOutcome::Occupied);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 1, 3, 4, 6]);
        let before = engine.clone();

        assert_eq!(engine.apply_move(Position::BottomRight), MoveOutcome::GameDecided);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_apply_index_out_of_range() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_index(9), Err(EngineError::CellOutOfRange(9)));
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_jump_out_of_range_leaves_cursor() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0]);

        let err = engine.jump_to(3).unwrap_err();
        assert_eq!(err, EngineError::InvalidIndex { index: 3, len: 3 });
        assert_eq!(engine.current_move(), 2);
    }

    #[test]
    fn test_describe_move_labels() {
        assert_eq!(describe_move(0, 0), "You are at move #0");
        assert_eq!(describe_move(0, 2), "Go to game start");
        assert_eq!(describe_move(3, 2), "Go to move #3");
        assert_eq!(describe_move(2, 2), "You are at move #2");
    }

    #[test]
    fn test_legal_moves_empty_after_win() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 1, 3, 4]);
        assert_eq!(engine.legal_moves().len(), 5);

        play(&mut engine, &[6]);
        assert!(engine.legal_moves().is_empty());
    }
}
