//! Long algebraic (UCI) move notation, e.g. `e2e4` or `a7a8q`.

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(kind) = mv.promo {
        s.push(kind.letter());
    }
    s
}

/// Resolves `txt` against the legal moves of `pos`, so the returned move
/// carries the correct castle/en-passant flags. A promotion without a piece
/// letter resolves to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.chars().nth(4) {
        Some(ch) => Some(PieceKind::from_letter(ch).filter(|k| PieceKind::PROMOTIONS.contains(k))?),
        None => None,
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from && m.to == to && (m.promo == promo || (promo.is_none() && m.promo == Some(PieceKind::Queen)))
    })
}
