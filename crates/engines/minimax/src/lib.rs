//! Minimax Chess Engine
//!
//! Exhaustive fixed-depth adversarial search with alpha-beta pruning and
//! material-only evaluation. The rules crate supplies move legality and
//! game termination; this crate only decides which move to play.

mod eval;
mod search;

use chess_rules::{move_to_coord, Engine, Position, SearchResult};
use tracing::debug;

pub use eval::evaluate;
pub use search::{minimax, select_best, INF_SCORE};

/// Chess engine driven by minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth depth-first search, one side maximizing and one minimizing
/// - Fail-soft alpha-beta pruning
/// - Material-only evaluation at the horizon
/// - Mate scores biased by distance, preferring the shortest forced mate
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for diagnostics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = search::select_best(pos, depth, &mut self.nodes);

        let chosen = match result.best_move {
            Some(mv) => move_to_coord(mv),
            None => "none".to_string(),
        };
        debug!(
            depth,
            nodes = self.nodes,
            score = result.score,
            best = %chosen,
            "search finished"
        );

        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
