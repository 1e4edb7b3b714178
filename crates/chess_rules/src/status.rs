use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::Color;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// True iff the side to move has no legal continuation.
pub fn is_terminal(pos: &Position) -> bool {
    legal_moves(pos).is_empty()
}

/// Classify a finished game, or None while moves remain.
pub fn outcome(pos: &Position) -> Option<Outcome> {
    if !legal_moves(pos).is_empty() {
        return None;
    }
    let stuck = pos.side_to_move;
    if pos.in_check(stuck) {
        Some(Outcome::Checkmate {
            winner: stuck.other(),
        })
    } else {
        Some(Outcome::Stalemate)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
