//! Plain-text rendering of the engine state.

use crate::order::HistoryOrder;
use rewind_tictactoe::{GameEngine, Position, Square};

const ROW_SEPARATOR: &str = "---+---+---";

/// Renders the current snapshot as three rows of cells.
///
/// Empty cells show their index so the user knows what to type. Cells of the
/// winning line are wrapped in brackets.
pub fn render_board(engine: &GameEngine) -> String {
    let board = engine.board();
    let line = engine.winning_line();

    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| {
                    let symbol = match board.get(pos) {
                        Square::Empty => pos.to_index().to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    };
                    if line.is_some_and(|l| l.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

/// Renders the history list, one entry per line, in `order`.
///
/// The entry under the cursor is flagged with `>`.
pub fn render_history(engine: &GameEngine, order: HistoryOrder) -> String {
    let current = engine.current_move();
    let entries: Vec<String> = engine
        .move_descriptions()
        .into_iter()
        .enumerate()
        .map(|(m, description)| {
            let flag = if m == current { '>' } else { ' ' };
            format!("{} {:>2}. {}", flag, m, description)
        })
        .collect();

    order.arrange(entries).join("\n")
}

/// Board, status line and history list.
pub fn render_frame(engine: &GameEngine, order: HistoryOrder) -> String {
    let mut frame = render_board(engine);
    frame.push_str("\n\n");
    frame.push_str(&engine.status_text());
    if engine.is_draw() {
        frame.push_str("\nNo moves left.");
    }
    frame.push_str("\n\nHistory:\n");
    frame.push_str(&render_history(engine, order));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_indices() {
        let engine = GameEngine::new();
        assert_eq!(
            render_board(&engine),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_winning_line_bracketed() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 3, 4, 6] {
            engine.apply_index(cell).unwrap();
        }
        assert_eq!(
            render_board(&engine),
            "[X]| O | 2 \n---+---+---\n[X]| O | 5 \n---+---+---\n[X]| 7 | 8 "
        );
    }

    #[test]
    fn test_history_orders() {
        let mut engine = GameEngine::new();
        engine.apply_index(4).unwrap();

        assert_eq!(
            render_history(&engine, HistoryOrder::Chronological),
            "   0. Go to game start\n>  1. You are at move #1"
        );
        assert_eq!(
            render_history(&engine, HistoryOrder::Reversed),
            ">  1. You are at move #1\n   0. Go to game start"
        );
    }

    #[test]
    fn test_frame_mentions_draw() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.apply_index(cell).unwrap();
        }
        let frame = render_frame(&engine, HistoryOrder::Chronological);
        assert!(frame.contains("Next player: O\nNo moves left."));
    }
}
