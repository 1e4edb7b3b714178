//! Forsyth-Edwards Notation import, used by tests, tooling, and the CLI's
//! `--fen` flag.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{CastlingRights, Position};
use crate::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 whitespace-separated fields, found {0}")]
    MissingFields(usize),
    #[error("board field must list 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("unknown piece character {0:?}")]
    BadPiece(char),
    #[error("rank {0:?} does not describe exactly 8 files")]
    BadRankWidth(String),
    #[error("side to move must be 'w' or 'b', found {0:?}")]
    BadSideToMove(String),
    #[error("unknown castling character {0:?}")]
    BadCastling(char),
    #[error("bad en-passant square {0:?}")]
    BadEnPassant(String),
    #[error("bad clock field {0:?}")]
    BadClock(String),
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::MissingFields(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        let mut squares = [None; 64];
        for (i, rank_text) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - i as i8;
            let mut file: i8 = 0;
            for ch in rank_text.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as i8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::BadPiece(ch))?;
                    let sq = square_at(file, rank)
                        .ok_or_else(|| FenError::BadRankWidth(rank_text.to_string()))?;
                    squares[sq as usize] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth(rank_text.to_string()));
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                let right = match ch {
                    'K' => CastlingRights::WHITE_KINGSIDE,
                    'Q' => CastlingRights::WHITE_QUEENSIDE,
                    'k' => CastlingRights::BLACK_KINGSIDE,
                    'q' => CastlingRights::BLACK_QUEENSIDE,
                    _ => return Err(FenError::BadCastling(ch)),
                };
                castling.grant(right);
            }
        }

        let en_passant = match fields[3] {
            "-" => None,
            name => {
                Some(parse_square(name).ok_or_else(|| FenError::BadEnPassant(name.to_string()))?)
            }
        };

        let halfmove_clock = parse_clock(fields.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_clock(fields.get(5).copied().unwrap_or("1"))?;

        Ok(Position {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }
}

fn parse_clock(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::BadClock(text.to_string()))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Position, FenError> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
