use super::*;

fn summary(moves: &[&str], result: &str) -> MatchSummary {
    MatchSummary {
        match_id: "m".into(),
        moves: moves.iter().map(|s| s.to_string()).collect(),
        final_fen: chess_core::START_FEN.into(),
        status: GameStatus::Ongoing,
        result: result.into(),
        adjudicated: false,
        white_time: 1,
        black_time: 2,
    }
}

#[test]
fn test_pgn_movetext_numbers_full_moves() {
    let s = summary(&["f3", "e5", "g4", "Qh4#"], "0-1");
    assert_eq!(s.pgn_movetext(), "1. f3 e5 2. g4 Qh4# 0-1");
    assert_eq!(s.plies(), 4);

    let odd = summary(&["e4", "e5", "Qh5"], "*");
    assert_eq!(odd.pgn_movetext(), "1. e4 e5 2. Qh5 *");

    assert_eq!(summary(&[], "*").pgn_movetext(), "*");
}

#[test]
fn test_summary_json_round_trip() {
    let mut s = summary(&["e4"], "1-0");
    s.status = GameStatus::Checkmate {
        winner: Color::White,
    };
    let path = std::env::temp_dir().join(format!("match_summary_{}.json", std::process::id()));

    s.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let loaded = MatchSummary::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(text.contains("\"finalFen\""));
    assert!(text.contains("\"kind\": \"checkmate\""));
    assert_eq!(loaded, s);
}

#[tokio::test]
async fn test_invalid_config_is_refused() {
    let config = BotConfig {
        think_min_ms: 10,
        think_max_ms: 10,
        ..Default::default()
    };
    assert!(matches!(
        LocalMatch::new(config).play().await,
        Err(SyncError::InvalidConfig { .. })
    ));
}
