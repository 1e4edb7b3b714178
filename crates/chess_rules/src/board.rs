use std::fmt;

use crate::types::*;

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Castling availability, one bit per right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;

    pub fn all() -> CastlingRights {
        CastlingRights(0b1111)
    }

    pub fn none() -> CastlingRights {
        CastlingRights(0)
    }

    pub fn has(self, rights: u8) -> bool {
        self.0 & rights != 0
    }

    pub fn grant(&mut self, rights: u8) {
        self.0 |= rights;
    }

    pub fn clear(&mut self, rights: u8) {
        self.0 &= !rights;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a double pawn push just passed over, if any.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// State needed to revert the most recent `make_move`, strictly LIFO.
#[derive(Clone, Debug)]
pub struct Undo {
    moved: Piece,
    captured: Option<(Square, Piece)>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    rook_hop: Option<(Square, Square)>,
}

impl Position {
    pub fn startpos() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut squares = [None; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            squares[file] = Some(Piece {
                color: Color::White,
                kind,
            });
            squares[8 + file] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            squares[48 + file] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            squares[56 + file] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }

        Position {
            squares,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn piece_count(&self, kind: PieceKind, color: Color) -> u32 {
        self.squares
            .iter()
            .filter(|&&occupant| occupant == Some(Piece { color, kind }))
            .count() as u32
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        (0u8..64).find(|&sq| {
            self.squares[sq as usize]
                == Some(Piece {
                    color,
                    kind: PieceKind::King,
                })
        })
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_attacked(sq, color.other()),
            None => false,
        }
    }

    /// Does any piece of `by` attack `target`? Scans outward from the target.
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn of `by` attacks `target` from one rank behind its push direction.
        let pawn_rank = match by {
            Color::White => tr - 1,
            Color::Black => tr + 1,
        };
        for df in [-1, 1] {
            if self.occupied_by(square_at(tf + df, pawn_rank), by, PieceKind::Pawn) {
                return true;
            }
        }

        for (df, dr) in KNIGHT_JUMPS {
            if self.occupied_by(square_at(tf + df, tr + dr), by, PieceKind::Knight) {
                return true;
            }
        }
        for (df, dr) in KING_STEPS {
            if self.occupied_by(square_at(tf + df, tr + dr), by, PieceKind::King) {
                return true;
            }
        }

        self.slider_reaches(target, by, &BISHOP_DIRS, PieceKind::Bishop)
            || self.slider_reaches(target, by, &ROOK_DIRS, PieceKind::Rook)
    }

    fn occupied_by(&self, sq: Option<Square>, color: Color, kind: PieceKind) -> bool {
        match sq {
            Some(s) => self.squares[s as usize] == Some(Piece { color, kind }),
            None => false,
        }
    }

    fn slider_reaches(
        &self,
        target: Square,
        by: Color,
        dirs: &[(i8, i8); 4],
        kind: PieceKind,
    ) -> bool {
        for &(df, dr) in dirs {
            let mut f = file_of(target) + df;
            let mut r = rank_of(target) + dr;
            while let Some(sq) = square_at(f, r) {
                if let Some(piece) = self.squares[sq as usize] {
                    if piece.color == by && (piece.kind == kind || piece.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    /// Apply a legal move in place. The returned token reverts exactly this
    /// move via `unmake_move`; tokens must be consumed in LIFO order.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.squares[mv.from as usize].expect("make_move: origin square is empty");
        let mut undo = Undo {
            moved,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            rook_hop: None,
        };

        let mut captured = self.squares[mv.to as usize].map(|piece| (mv.to, piece));
        if mv.kind == MoveKind::EnPassant {
            // The captured pawn sits behind the destination square.
            let behind = match moved.color {
                Color::White => mv.to - 8,
                Color::Black => mv.to + 8,
            };
            captured = self.squares[behind as usize].map(|piece| (behind, piece));
            self.squares[behind as usize] = None;
        }
        undo.captured = captured;

        self.squares[mv.from as usize] = None;
        self.squares[mv.to as usize] = Some(match mv.promotion {
            Some(kind) => Piece {
                color: moved.color,
                kind,
            },
            None => moved,
        });

        if mv.kind == MoveKind::Castle {
            if let Some((rook_from, rook_to)) = rook_hop_for(mv.to) {
                let rook = self.squares[rook_from as usize].take();
                self.squares[rook_to as usize] = rook;
                undo.rook_hop = Some((rook_from, rook_to));
            }
        }

        self.update_castling_rights(moved, mv, captured);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn {
            let from_rank = rank_of(mv.from);
            let to_rank = rank_of(mv.to);
            if (from_rank - to_rank).abs() == 2 {
                self.en_passant = square_at(file_of(mv.from), (from_rank + to_rank) / 2);
            }
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    /// Revert the single most recent `make_move`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.rook_hop {
            let rook = self.squares[rook_to as usize].take();
            self.squares[rook_from as usize] = rook;
        }

        // `undo.moved` is the original piece, so promotions revert to the pawn.
        self.squares[mv.to as usize] = None;
        self.squares[mv.from as usize] = Some(undo.moved);
        if let Some((square, piece)) = undo.captured {
            self.squares[square as usize] = Some(piece);
        }
    }

    fn update_castling_rights(&mut self, moved: Piece, mv: Move, captured: Option<(Square, Piece)>) {
        if moved.kind == PieceKind::King {
            self.castling.clear(match moved.color {
                Color::White => CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE,
                Color::Black => CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE,
            });
        }
        if moved.kind == PieceKind::Rook {
            self.castling.clear(corner_right(mv.from));
        }
        if let Some((square, piece)) = captured {
            if piece.kind == PieceKind::Rook {
                self.castling.clear(corner_right(square));
            }
        }
    }
}

/// Rook relocation for a king landing on a castling destination.
fn rook_hop_for(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

/// The castling right tied to a rook's home corner; 0 for any other square.
fn corner_right(sq: Square) -> u8 {
    match sq {
        0 => CastlingRights::WHITE_QUEENSIDE,
        7 => CastlingRights::WHITE_KINGSIDE,
        56 => CastlingRights::BLACK_QUEENSIDE,
        63 => CastlingRights::BLACK_KINGSIDE,
        _ => 0,
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8usize).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8usize {
                let ch = match self.squares[rank * 8 + file] {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
