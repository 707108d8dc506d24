//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameEngine, Mark, Square};

/// Invariant: snapshot `k` equals snapshot `k - 1` plus one new mark.
///
/// The changed square was empty before and now holds the mark of the player
/// who made move `k`. Snapshots are never edited in place, so earlier marks
/// never change.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().windows(2).enumerate().all(|(k, pair)| {
            let mover = Mark::for_move(k);
            let mut changed = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after);

            matches!(
                (changed.next(), changed.next()),
                (Some((Square::Empty, Square::Occupied(mark))), None) if *mark == mover
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::AlternatingMarksInvariant;
    use crate::{Board, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::TopLeft);
        engine.apply_move(Position::Center);
        engine.apply_move(Position::TopRight);

        assert!(SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_rejected_moves_add_nothing() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);
        engine.apply_move(Position::Center);

        assert_eq!(engine.history_len(), 2);
        assert!(SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_two_cells_changed_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Mark::X);
        let second = Board::new()
            .with_mark(Position::TopLeft, Mark::O)
            .with_mark(Position::TopCenter, Mark::X);
        let engine = GameEngine::from_parts(vec![Board::new(), first, second], 2);

        // Counts still alternate; only the moved mark gives it away.
        assert!(AlternatingMarksInvariant::holds(&engine));
        assert!(!SingleCellDeltaInvariant::holds(&engine));
    }
}
