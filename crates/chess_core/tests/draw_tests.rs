//! Tests for game-ending conditions
//!
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use chess_core::{Color, Game, GameStatus, PieceKind, Position, legal_moves, position_status};

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN must parse")
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black));
    assert_eq!(position_status(&pos), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let pos = fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(position_status(&pos), GameStatus::Stalemate);
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_boundary() {
    assert!(fen("8/8/8/4k3/8/4K3/8/4R3 w - - 100 60").is_fifty_move_draw());
    assert!(!fen("8/8/8/4k3/8/4K3/8/4R3 w - - 99 60").is_fifty_move_draw());
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut game = Game::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    let pawn_push = game
        .legal_moves()
        .into_iter()
        .find(|m| game.position().piece_at(m.from).map(|p| p.kind) == Some(PieceKind::Pawn))
        .expect("a pawn move is available");
    game.play(pawn_push).unwrap();
    assert_eq!(game.position().halfmove_clock, 0);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_checkmate_wins_over_fifty_move_rule() {
    // Mate delivered on the 100th half-move still counts as mate.
    let pos = fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 80");
    assert_eq!(
        position_status(&pos),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_repetition_needs_three_occurrences() {
    let mut game = Game::new();
    for san in ["Nc3", "Nc6", "Nb1", "Nb8"] {
        game.play_san(san).unwrap();
    }
    assert_eq!(game.repetitions(), 2);
    assert_eq!(game.status(), GameStatus::Ongoing);
    for san in ["Nc3", "Nc6", "Nb1", "Nb8"] {
        game.play_san(san).unwrap();
    }
    assert_eq!(game.status(), GameStatus::ThreefoldRepetition);
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_cases() {
    let drawn = [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
    ];
    for f in drawn {
        assert!(fen(f).is_insufficient_material(), "{f} should be drawn");
    }
}

#[test]
fn test_sufficient_material_cases() {
    let playable = [
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ];
    for f in playable {
        assert!(!fen(f).is_insufficient_material(), "{f} should be playable");
    }
}
