use super::*;

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN must parse")
}

#[test]
fn test_startpos_moves() {
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(legal_moves(&pos).len(), 48);
}

#[test]
fn test_generation_order_is_square_major() {
    let moves = legal_moves(&Position::startpos());
    // b1 knight moves come before any pawn move.
    assert_eq!(moves[0].from, 1);
    assert!(moves.windows(2).all(|w| w[0].from <= w[1].from));
}

#[test]
fn test_en_passant_is_generated() {
    let pos = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = legal_moves(&pos);
    let ep = moves
        .iter()
        .find(|m| m.is_en_passant)
        .expect("exd6 e.p. should be legal");
    assert_eq!(sq_to_coord(ep.to), "d6");
}

#[test]
fn test_promotions_expand_to_four_moves() {
    let pos = fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .collect();
    assert_eq!(promos.len(), 4);
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // Black rook on f8 covers f1.
    let pos = fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));
}

#[test]
fn test_pinned_piece_cannot_leave_the_pin() {
    // White bishop on e2 is pinned by the rook on e8.
    let pos = fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(legal_moves(&pos).iter().all(|m| m.from != 12));
}

#[test]
fn test_legal_moves_into_leaves_position_untouched() {
    let mut pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let before = pos.clone();
    let mut buf = Vec::new();
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(pos, before);
}

#[test]
fn test_has_legal_move_matches_generation() {
    assert!(has_legal_move(&Position::startpos()));
    // Fool's mate: white is mated.
    let mated = fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(!has_legal_move(&mated));
    // Stalemate: black king boxed in, not in check.
    let stalemate = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!has_legal_move(&stalemate));
}
