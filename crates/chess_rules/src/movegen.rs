use crate::board::{BISHOP_DIRS, KING_STEPS, KNIGHT_JUMPS, ROOK_DIRS};
use crate::board::{CastlingRights, Position};
use crate::types::*;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Clones the position once and delegates to `legal_moves_into`.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut scratch = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut out);
    out
}

/// Generate all legal moves into `out`, reusing its allocation across calls.
/// Legality filtering plays each pseudo-legal move on `pos` and unplays it.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    generate_pseudo(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let legal = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        legal
    });
}

fn generate_pseudo(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(piece) = pos.piece_at(from) else {
            continue;
        };
        if piece.color != pos.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(pos, from, piece.color, out),
            PieceKind::Knight => leaper_moves(pos, from, piece.color, &KNIGHT_JUMPS, out),
            PieceKind::Bishop => slider_moves(pos, from, piece.color, &BISHOP_DIRS, out),
            PieceKind::Rook => slider_moves(pos, from, piece.color, &ROOK_DIRS, out),
            PieceKind::Queen => {
                slider_moves(pos, from, piece.color, &BISHOP_DIRS, out);
                slider_moves(pos, from, piece.color, &ROOK_DIRS, out);
            }
            PieceKind::King => {
                leaper_moves(pos, from, piece.color, &KING_STEPS, out);
                castle_moves(pos, from, piece.color, out);
            }
        }
    }
}

fn pawn_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let (ahead, start_rank, promo_rank): (i8, i8, i8) = match color {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };
    let f = file_of(from);
    let r = rank_of(from);

    fn push_or_promote(out: &mut Vec<Move>, from: Square, to: Square, promo_rank: i8) {
        if rank_of(to) == promo_rank {
            for kind in PROMOTION_KINDS {
                out.push(Move::promoting(from, to, kind));
            }
        } else {
            out.push(Move::normal(from, to));
        }
    }

    if let Some(one) = square_at(f, r + ahead) {
        if pos.piece_at(one).is_none() {
            push_or_promote(out, from, one, promo_rank);
            if r == start_rank {
                if let Some(two) = square_at(f, r + 2 * ahead) {
                    if pos.piece_at(two).is_none() {
                        out.push(Move::normal(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = square_at(f + df, r + ahead) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(occupant) if occupant.color != color => push_or_promote(out, from, to, promo_rank),
            None if pos.en_passant == Some(to) => out.push(Move::en_passant(from, to)),
            _ => {}
        }
    }
}

fn leaper_moves(
    pos: &Position,
    from: Square,
    color: Color,
    steps: &[(i8, i8); 8],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in steps {
        if let Some(to) = square_at(file_of(from) + df, rank_of(from) + dr) {
            match pos.piece_at(to) {
                Some(occupant) if occupant.color == color => {}
                _ => out.push(Move::normal(from, to)),
            }
        }
    }
}

fn slider_moves(
    pos: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8); 4],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut f = file_of(from) + df;
        let mut r = rank_of(from) + dr;
        while let Some(to) = square_at(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::normal(from, to)),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn castle_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let home: Square = match color {
        Color::White => 4,
        Color::Black => 60,
    };
    // Castling requires the king on its home square and not in check.
    if from != home || pos.in_check(color) {
        return;
    }

    let lanes: [(u8, Square, &'static [Square]); 2] = match color {
        Color::White => [
            (CastlingRights::WHITE_KINGSIDE, 6, &[5, 6]),
            (CastlingRights::WHITE_QUEENSIDE, 2, &[1, 2, 3]),
        ],
        Color::Black => [
            (CastlingRights::BLACK_KINGSIDE, 62, &[61, 62]),
            (CastlingRights::BLACK_QUEENSIDE, 58, &[57, 58, 59]),
        ],
    };

    let enemy = color.other();
    for (right, king_to, between) in lanes {
        if !pos.castling.has(right) {
            continue;
        }
        if between.iter().any(|&sq| pos.piece_at(sq).is_some()) {
            continue;
        }
        // The king may not pass through or land on an attacked square.
        let passed = if king_to > home { home + 1 } else { home - 1 };
        if pos.is_attacked(passed, enemy) || pos.is_attacked(king_to, enemy) {
            continue;
        }
        out.push(Move::castle(home, king_to));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
