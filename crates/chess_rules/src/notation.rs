use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::*;

/// Coordinate notation for a move: "e2e4", "e7e8q".
pub fn move_to_coord(mv: Move) -> String {
    let mut text = square_name(mv.from);
    text.push_str(&square_name(mv.to));
    if let Some(kind) = mv.promotion {
        text.push(match kind {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    text
}

/// Parse coordinate notation and match it against the legal-move list, so the
/// returned move carries the correct castle/en-passant/promotion details.
/// Returns None for malformed input and for moves that are not legal here.
pub fn parse_coord_move(pos: &Position, text: &str) -> Option<Move> {
    let text = text.trim();
    if text.len() < 4 || text.len() > 5 {
        return None;
    }
    let from = parse_square(text.get(0..2)?)?;
    let to = parse_square(text.get(2..4)?)?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b) => Some(match b.to_ascii_lowercase() {
            b'q' => PieceKind::Queen,
            b'r' => PieceKind::Rook,
            b'b' => PieceKind::Bishop,
            b'n' => PieceKind::Knight,
            _ => return None,
        }),
    };

    // Promotion moves must spell out the piece; a bare "e7e8" matches nothing.
    legal_moves(pos)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
