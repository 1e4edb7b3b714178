use super::*;
use std::io::Cursor;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

#[test]
fn quit_and_resign_are_recognized() {
    let pos = Position::startpos();
    assert!(matches!(
        interpret_input(&pos, "quit\n"),
        Some(PlayerAction::Resign)
    ));
    assert!(matches!(
        interpret_input(&pos, "  RESIGN  "),
        Some(PlayerAction::Resign)
    ));
}

#[test]
fn legal_moves_are_accepted_and_junk_is_not() {
    let pos = Position::startpos();
    assert!(matches!(
        interpret_input(&pos, "e2e4\n"),
        Some(PlayerAction::Play(_))
    ));
    assert!(interpret_input(&pos, "e2e5").is_none());
    assert!(interpret_input(&pos, "not a move").is_none());
    assert!(interpret_input(&pos, "").is_none());
}

#[test]
fn resigning_ends_the_session() {
    let mut session = GameSession::new(
        Position::startpos(),
        Box::new(RandomEngine::new()),
        1,
        Color::White,
    );

    let mut input = Cursor::new(&b"e2e4\nquit\n"[..]);
    let mut output = Vec::new();
    session.run(&mut input, &mut output).expect("session runs");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.contains("plays"));
    assert!(text.contains("White resigns. Black wins."));
}

#[test]
fn bad_input_reprompts_without_moving() {
    let mut session = GameSession::new(
        Position::startpos(),
        Box::new(RandomEngine::new()),
        1,
        Color::White,
    );

    let mut input = Cursor::new(&b"e9e9\nquit\n"[..]);
    let mut output = Vec::new();
    session.run(&mut input, &mut output).expect("session runs");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.contains("Illegal or malformed move"));
}

#[test]
fn finished_game_is_announced_immediately() {
    // Checkmate already on the board; no input should be needed.
    let mated =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .expect("valid FEN");
    let mut session = GameSession::new(mated, Box::new(MinimaxEngine::new()), 2, Color::Black);

    let mut input = Cursor::new(&b""[..]);
    let mut output = Vec::new();
    session.run(&mut input, &mut output).expect("session runs");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.contains("Checkmate. White wins."));
}
