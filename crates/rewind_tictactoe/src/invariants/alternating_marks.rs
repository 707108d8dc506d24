//! Alternating marks invariant: X and O counts follow move parity.

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: at snapshot `k`, X leads O by exactly `k % 2` marks.
///
/// X always moves first and the players alternate, so after an even number
/// of moves the counts are equal and after an odd number X has one extra.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().enumerate().all(|(k, board)| {
            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            x >= o && x - o == k % 2 && x + o == k
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... from the empty board"
    }
}
