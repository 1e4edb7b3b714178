pub mod board;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;

// Re-export game logic (not engine-specific)
pub use board::{CastlingRights, Position, Undo};
pub use fen::FenError;
pub use movegen::{legal_moves, legal_moves_into};
pub use notation::{move_to_coord, parse_coord_move};
pub use perft::perft;
pub use status::{is_terminal, outcome, Outcome};
pub use types::*;

// =============================================================================
// Engine trait — implemented by all move-selecting engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line; positive favors White
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for diagnostics)
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// This is the seam between the rules crate and move selection, so engines
/// with different selection policies can be swapped behind one interface.
pub trait Engine: Send {
    /// Choose a move for the given position at a fixed depth in plies.
    ///
    /// A `None` best move means the position has no legal continuation; the
    /// caller must treat that as the end of the game, not a failure.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Engine display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
