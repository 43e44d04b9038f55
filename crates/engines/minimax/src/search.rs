//! Minimax search with alpha-beta pruning.
//!
//! The side to move at the root maximizes and the opponent minimizes; every
//! leaf is scored by [`evaluate_for`] from the root side's point of view.
//! One working position is mutated in place and every simulated move is
//! unmade before the next sibling is tried.

use chess_core::{legal_moves_into, Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::evaluate_for;

/// Stand-ins for +/- infinity; no material total comes close.
pub const SCORE_INF: i32 = 1_000_000;

/// Result from [`pick_best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move and its score, `None` if the side to move has no legal move
    pub best_move: Option<(Move, i32)>,
    /// Positions visited below the root
    pub nodes: u64,
}

/// Picks a move for the side to move in `pos`.
///
/// Root moves are tried in generation order. A move replaces the current
/// best when it scores strictly higher, or with probability 1/2 when it
/// ties exactly; `rng` is consulted only on exact ties. Each root move is
/// searched with a full window so that tied scores are exact values.
///
/// `pos` is used as the working board and is restored before returning.
pub fn pick_best_move<R: Rng + ?Sized>(pos: &mut Position, depth: u8, rng: &mut R) -> SearchOutcome {
    let root_side = pos.side_to_move;
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    let mut nodes = 0u64;
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            nodes,
        };
    }

    let mut best: Option<Move> = None;
    let mut best_score = -SCORE_INF;

    for &mv in &moves {
        let undo = pos.make_move(mv);
        nodes += 1;
        let score = minimax(
            pos,
            depth.saturating_sub(1),
            -SCORE_INF,
            SCORE_INF,
            false,
            root_side,
            &mut nodes,
        );
        pos.unmake_move(mv, undo);

        if score > best_score || (score == best_score && rng.gen_bool(0.5)) {
            best_score = score;
            best = Some(mv);
        }
    }

    let best_move = match best {
        Some(mv) => (mv, best_score),
        // Nothing rose above -infinity; fall back to any legal move.
        None => (*moves.choose(rng).unwrap_or(&moves[0]), best_score),
    };

    tracing::trace!(nodes, score = best_move.1, "minimax search finished");
    SearchOutcome {
        best_move: Some(best_move),
        nodes,
    }
}

fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root_side: Color,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || pos.is_fifty_move_draw() || pos.is_insufficient_material() {
        return evaluate_for(pos, root_side);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if moves.is_empty() {
        // Checkmate or stalemate: scored on material like any other leaf.
        return evaluate_for(pos, root_side);
    }

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for mv in moves {
        let undo = pos.make_move(mv);
        *nodes += 1;
        let score = minimax(pos, depth - 1, alpha, beta, !maximizing, root_side, nodes);
        pos.unmake_move(mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
