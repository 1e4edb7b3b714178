use super::*;
use crate::board::Position;

#[test]
fn game_in_progress_has_no_outcome() {
    let pos = Position::startpos();
    assert!(!is_terminal(&pos));
    assert_eq!(outcome(&pos), None);
}

#[test]
fn scholars_mate_is_a_white_win() {
    let pos =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .expect("valid FEN");
    assert!(is_terminal(&pos));
    assert_eq!(
        outcome(&pos),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn fools_mate_is_a_black_win() {
    let pos =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("valid FEN");
    assert_eq!(
        outcome(&pos),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn cornered_king_without_check_is_stalemate() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("valid FEN");
    assert!(is_terminal(&pos));
    assert_eq!(outcome(&pos), Some(Outcome::Stalemate));
}

#[test]
fn check_with_escapes_is_not_terminal() {
    let pos = Position::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2")
        .expect("valid FEN");
    assert!(!is_terminal(&pos));
    assert_eq!(outcome(&pos), None);
}
