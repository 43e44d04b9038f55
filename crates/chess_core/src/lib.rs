pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod san;
pub mod types;
pub mod uci;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{FenError, MoveError};
pub use game::{Game, GameStatus, PlayedMove, position_status};
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use san::{move_to_san, parse_san};
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by move-selection engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line from the engine's side
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Limits a caller places on a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Trait that move-selection engines implement.
pub trait Engine: Send {
    /// Search the position and pick a move for the side to move.
    ///
    /// Implementations must leave no trace on `pos` and return
    /// `best_move: None` exactly when the side to move has no legal move.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
