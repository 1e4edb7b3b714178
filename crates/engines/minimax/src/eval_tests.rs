use super::*;
use chess_rules::{parse_coord_move, Position};

fn play(pos: &mut Position, coord: &str) {
    let mv = parse_coord_move(pos, coord).expect("move should be legal");
    pos.make_move(mv);
}

#[test]
fn startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn quiet_pawn_advance_keeps_the_balance() {
    let mut pos = Position::startpos();
    play(&mut pos, "e2e4");
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn pawn_capture_swings_by_exactly_one() {
    let mut pos = Position::startpos();
    play(&mut pos, "e2e4");
    play(&mut pos, "d7d5");
    play(&mut pos, "e4d5");
    assert_eq!(evaluate(&pos), 1);
}

#[test]
fn score_is_oriented_to_white_not_the_side_to_move() {
    let white_to_move =
        Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("valid FEN");
    let black_to_move =
        Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
            .expect("valid FEN");
    // Black is missing the queen; the score favors White either way.
    assert_eq!(evaluate(&white_to_move), 9);
    assert_eq!(evaluate(&black_to_move), 9);
}

#[test]
fn kings_carry_no_material() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
    assert_eq!(evaluate(&pos), 0);
}
