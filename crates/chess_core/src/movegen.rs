//! Legal move generation.
//!
//! Moves are produced in a fixed order: origin squares a1..h8, then the
//! per-piece direction tables below. Seeded searches rely on this order
//! being stable to reproduce their tie-breaks.

use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position};
use crate::types::*;

const ROYAL_DIRS: [(i8, i8); 8] = [
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into `out`, reusing its allocation.
///
/// `pos` is used as scratch space for king-safety checks and is returned
/// unchanged.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let exposes_king = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !exposes_king
    });
}

/// True when the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    !legal_moves(pos).is_empty()
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    for (from, pc) in pos.pieces() {
        if pc.color != us {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => pawn_moves(pos, from, us, out),
            PieceKind::Knight => step_moves(pos, from, us, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => slide_moves(pos, from, us, &DIAGONALS, out),
            PieceKind::Rook => slide_moves(pos, from, us, &ORTHOGONALS, out),
            PieceKind::Queen => slide_moves(pos, from, us, &ROYAL_DIRS, out),
            PieceKind::King => {
                step_moves(pos, from, us, &KING_DELTAS, out);
                castle_moves(pos, from, us, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, us: Color, out: &mut Vec<Move>) {
    if rank_of(to) == us.other().back_rank() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promotion(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let fwd = us.forward();
    let start_rank = us.back_rank() + fwd;

    if let Some(one) = offset(from, (0, fwd))
        && pos.piece_at(one).is_none()
    {
        push_pawn_move(from, one, us, out);

        if rank_of(from) == start_rank
            && let Some(two) = offset(from, (0, 2 * fwd))
            && pos.piece_at(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    for df in [-1, 1] {
        let Some(to) = offset(from, (df, fwd)) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != us => push_pawn_move(from, to, us, out),
            None if pos.en_passant == Some(to) => out.push(Move::en_passant(from, to)),
            _ => {}
        }
    }
}

fn step_moves(pos: &Position, from: u8, us: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &d in deltas {
        if let Some(to) = offset(from, d)
            && pos.piece_at(to).is_none_or(|pc| pc.color != us)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn slide_moves(pos: &Position, from: u8, us: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &d in dirs {
        let mut cur = from;
        while let Some(to) = offset(cur, d) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != us {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

fn castle_moves(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let base = (us.back_rank() * 8) as u8;
    let king_home = base + 4;
    if from != king_home || pos.in_check(us) {
        return;
    }
    let them = us.other();
    let empty = |files: &[u8]| files.iter().all(|&f| pos.piece_at(base + f).is_none());
    let safe = |files: &[u8]| {
        files
            .iter()
            .all(|&f| !pos.is_square_attacked(base + f, them))
    };
    let rook_home = |f: u8| pos.piece_at(base + f) == Some(Piece::new(us, PieceKind::Rook));

    if pos.castling.kingside(us) && rook_home(7) && empty(&[5, 6]) && safe(&[5, 6]) {
        out.push(Move::castle(king_home, base + 6));
    }
    if pos.castling.queenside(us) && rook_home(0) && empty(&[1, 2, 3]) && safe(&[2, 3]) {
        out.push(Move::castle(king_home, base + 2));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
