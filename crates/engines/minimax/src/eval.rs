//! Material-only position evaluation.

use chess_rules::{Color, PieceKind, Position};

/// Whole-point piece values. The king carries no material term: it can never
/// be captured in a legal game.
const PIECE_VALUES: [(PieceKind, i32); 5] = [
    (PieceKind::Pawn, 1),
    (PieceKind::Knight, 3),
    (PieceKind::Bishop, 3),
    (PieceKind::Rook, 5),
    (PieceKind::Queen, 9),
];

/// Evaluates the position by material balance alone.
///
/// Positive favors White, negative favors Black, regardless of whose turn it
/// is. Pure function of the board contents; never mutates the position.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;
    for (kind, value) in PIECE_VALUES {
        let white = pos.piece_count(kind, Color::White) as i32;
        let black = pos.piece_count(kind, Color::Black) as i32;
        score += value * (white - black);
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
