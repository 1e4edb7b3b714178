use super::*;
use chess_rules::legal_moves;

#[test]
fn random_engine_returns_a_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos, 1);

    let chosen = result.best_move.expect("startpos has moves");
    assert!(legal_moves(&pos).contains(&chosen));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let pos =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .expect("valid FEN");

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("valid FEN");

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_none());
}
