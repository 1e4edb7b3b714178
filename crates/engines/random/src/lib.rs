//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful as a
//! baseline opponent (any searching engine should beat it easily) and for
//! stress testing move generation.

use chess_rules::{legal_moves_into, Engine, Position, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves. No evaluation at all; the
/// requested depth is ignored.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let mut scratch = pos.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut scratch, &mut moves);

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth,
            nodes: moves.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
