//! Standard Algebraic Notation.

use crate::{board::Position, movegen::legal_moves, types::*};

/// Renders `mv` (which must be legal in `pos`) in SAN, including the
/// check or mate suffix.
pub fn move_to_san(pos: &Position, mv: Move) -> String {
    let legal = legal_moves(pos);
    san_with_moves(pos, mv, &legal)
}

fn san_with_moves(pos: &Position, mv: Move, legal: &[Move]) -> String {
    let mut san = String::with_capacity(8);

    if mv.is_castle {
        san.push_str(if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" });
    } else {
        let Some(moved) = pos.piece_at(mv.from) else {
            return String::new();
        };
        let captures = mv.is_en_passant || pos.piece_at(mv.to).is_some();

        if moved.kind == PieceKind::Pawn {
            if captures {
                san.push((b'a' + file_of(mv.from) as u8) as char);
            }
        } else {
            san.push(moved.kind.letter().to_ascii_uppercase());
            san.push_str(&disambiguation(pos, mv, moved, legal));
        }

        if captures {
            san.push('x');
        }
        san.push_str(&sq_to_coord(mv.to));

        if let Some(promo) = mv.promo {
            san.push('=');
            san.push(promo.letter().to_ascii_uppercase());
        }
    }

    let mut after = pos.clone();
    after.make_move(mv);
    if after.in_check(after.side_to_move) {
        san.push(if legal_moves(&after).is_empty() { '#' } else { '+' });
    }
    san
}

/// File, rank, or full origin square needed to tell `mv` apart from other
/// legal moves by the same kind of piece to the same square.
fn disambiguation(pos: &Position, mv: Move, moved: Piece, legal: &[Move]) -> String {
    let rivals: Vec<u8> = legal
        .iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| pos.piece_at(m.from) == Some(moved))
        .map(|m| m.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let coord = sq_to_coord(mv.from);
    if rivals.iter().all(|&r| file_of(r) != file_of(mv.from)) {
        coord[..1].to_string()
    } else if rivals.iter().all(|&r| rank_of(r) != rank_of(mv.from)) {
        coord[1..].to_string()
    } else {
        coord
    }
}

/// Finds the legal move whose SAN matches `text`. Check/mate suffixes and
/// annotation marks (`!`, `?`) are ignored on both sides of the comparison.
pub fn parse_san(pos: &Position, text: &str) -> Option<Move> {
    let wanted = strip_suffixes(text.trim());
    if wanted.is_empty() {
        return None;
    }
    let wanted = wanted.replace('0', "O");
    let legal = legal_moves(pos);
    legal
        .iter()
        .copied()
        .find(|&mv| strip_suffixes(&san_with_moves(pos, mv, &legal)) == wanted)
}

fn strip_suffixes(s: &str) -> &str {
    s.trim_end_matches(['+', '#', '!', '?'])
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
