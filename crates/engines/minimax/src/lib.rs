//! Minimax Chess Bot
//!
//! Depth-limited minimax with alpha-beta pruning over a material-only
//! evaluation. Exact ties at the root are broken at random, so the bot
//! does not replay the same game move for move.

pub mod eval;
pub mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use eval::{evaluate_for, material_balance, piece_value, PIECE_VALUES};
pub use search::{pick_best_move, SearchOutcome, SCORE_INF};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 2;

/// Minimax bot with an injectable random source.
///
/// The random source is only used for tie-breaking and for the fallback
/// pick when no move scores above -infinity. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct MinimaxBot<R = StdRng> {
    rng: R,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxBot<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> MinimaxBot<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<R: Rng + Send> Engine for MinimaxBot<R> {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let mut work = pos.clone();
        let outcome = pick_best_move(&mut work, limits.depth, &mut self.rng);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
