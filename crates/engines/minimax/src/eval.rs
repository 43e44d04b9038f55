//! Static material evaluation.

use chess_core::{Color, PieceKind, Position};

/// Material values, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Signed material sum over the whole board: White pieces count positive,
/// Black pieces negative. No positional terms.
pub fn material_balance(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(_, pc)| match pc.color {
            Color::White => piece_value(pc.kind),
            Color::Black => -piece_value(pc.kind),
        })
        .sum()
}

/// Material balance seen from `side`: positive means `side` is ahead.
pub fn evaluate_for(pos: &Position, side: Color) -> i32 {
    match side {
        Color::White => material_balance(pos),
        Color::Black => -material_balance(pos),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
