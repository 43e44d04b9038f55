use super::*;
use crate::types::{Move, PieceKind};

#[test]
fn piece_keys_differ_by_square_and_piece() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece_key(pawn, 0), ZOBRIST.piece_key(pawn, 1));
    assert_ne!(ZOBRIST.piece_key(pawn, 8), ZOBRIST.piece_key(black_pawn, 8));
}

#[test]
fn transposed_move_orders_share_a_key() {
    // 1. Nf3 Nf6 2. Nc3 and 1. Nc3 Nf6 2. Nf3 reach the same position.
    let mut a = Position::startpos();
    for mv in [Move::new(6, 21), Move::new(62, 45), Move::new(1, 18)] {
        a.make_move(mv);
    }
    let mut b = Position::startpos();
    for mv in [Move::new(1, 18), Move::new(62, 45), Move::new(6, 21)] {
        b.make_move(mv);
    }
    assert_eq!(a.zobrist_key(), b.zobrist_key());
}

#[test]
fn side_to_move_changes_key() {
    let white = Position::startpos();
    let mut black = white.clone();
    black.side_to_move = Color::Black;
    assert_ne!(white.zobrist_key(), black.zobrist_key());
}

#[test]
fn castling_rights_change_key() {
    let full = Position::startpos();
    let mut reduced = full.clone();
    reduced.castling.wk = false;
    assert_ne!(full.zobrist_key(), reduced.zobrist_key());
}
