//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
///
/// When several lines are complete at once the first one listed wins the
/// tie-break. Legal alternating play never produces that, but the order is
/// fixed so the reported line is deterministic.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three same-mark squares in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    mark: Mark,
    cells: [Position; 3],
}

impl WinningLine {
    /// The mark that owns the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The three positions, in line order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The three board indices, in line order.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first complete line on the board.
///
/// Returns `None` if no line holds three identical marks.
#[instrument(level = "trace")]
pub fn calculate_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark)
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
        {
            Some(WinningLine {
                mark,
                cells: [a, b, c],
            })
        }
        _ => None,
    })
}
