//! Tests driving the shell loop with scripted input.

use rewind_shell::{HistoryOrder, Shell};
use std::io::Cursor;

fn run_script(order: HistoryOrder, script: &str) -> (Shell, String) {
    let mut shell = Shell::new(order, "> ".to_string());
    let mut out = Vec::new();
    shell
        .run(Cursor::new(script.to_string()), &mut out)
        .expect("shell runs");
    (shell, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_win_by_column() {
    let (shell, out) = run_script(HistoryOrder::Chronological, "0\n1\n3\n4\n6\n");

    assert_eq!(shell.engine().status_text(), "Winner: X");
    assert_eq!(shell.engine().highlighted_cells(), vec![0, 3, 6]);
    assert!(out.contains("[X]| O | 2 "));
    assert!(out.contains("Winner: X"));
}

#[test]
fn test_time_travel_rewrites_future() {
    let script = "move center\nm top-left\nm 8\njump 1\nmove 2\n";
    let (shell, out) = run_script(HistoryOrder::Chronological, script);

    let engine = shell.engine();
    assert_eq!(engine.history_len(), 3);
    assert_eq!(engine.current_move(), 2);
    assert!(engine.board().is_empty(rewind_tictactoe::Position::BottomRight));
    assert!(out.contains(">  2. You are at move #2"));
}

#[test]
fn test_rejections_are_reported_not_fatal() {
    let script = "4\n4\njump 7\nfly away\n\n0\n";
    let (shell, out) = run_script(HistoryOrder::Chronological, script);

    assert!(out.contains("Center is already taken."));
    assert!(out.contains("Move index 7 is out of range (history has 2 snapshots)."));
    assert!(out.contains("Unrecognized command 'fly away'. Type 'help' for commands."));
    assert_eq!(shell.engine().history_len(), 3);
}

#[test]
fn test_move_after_win_is_ignored() {
    let (shell, out) = run_script(HistoryOrder::Chronological, "0\n1\n3\n4\n6\n8\n");

    assert!(out.contains("The game is decided. Jump back to play on."));
    assert_eq!(shell.engine().history_len(), 6);
}

#[test]
fn test_quit_stops_reading() {
    let (shell, _) = run_script(HistoryOrder::Chronological, "4\nquit\n0\n");
    assert_eq!(shell.engine().history_len(), 2);
}

#[test]
fn test_toggle_reverses_history_list() {
    let (shell, out) = run_script(HistoryOrder::Chronological, "4\ntoggle\n");

    assert_eq!(shell.order(), HistoryOrder::Reversed);
    assert!(out.contains("History:\n>  1. You are at move #1\n   0. Go to game start"));
}

#[test]
fn test_view_prints_json() {
    let (_, out) = run_script(HistoryOrder::Reversed, "4\nview\n");
    assert!(out.contains("\"status\": \"Next player: O\""));
    assert!(out.contains("\"history_len\": 2"));
}
