use super::*;
use serde_json::json;

fn sample() -> MatchRecord {
    MatchRecord::new(
        "m1",
        "alice",
        vec![Player::human("alice", Color::White), Player::bot("bot", Color::Black)],
        300_000,
    )
}

#[test]
fn test_record_serializes_in_camel_case() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "m1",
            "players": [
                { "id": "alice", "color": "white", "isBot": false },
                { "id": "bot", "color": "black", "isBot": true }
            ],
            "creatorId": "alice",
            "fen": START_FEN,
            "whiteTime": 300000,
            "blackTime": 300000,
            "isGameOver": false
        })
    );
}

#[test]
fn test_record_reads_minimal_json() {
    let record: MatchRecord = serde_json::from_value(json!({
        "id": "m2",
        "players": [{ "id": "x", "color": "black" }],
        "creatorId": "x",
        "fen": START_FEN,
        "whiteTime": 1000,
        "blackTime": 2000,
        "lastMove": { "from": "e2", "to": "e4", "san": "e4" },
        "updatedAt": "2024-05-01T12:00:00Z"
    }))
    .unwrap();

    assert!(!record.players[0].is_bot);
    assert!(!record.is_game_over);
    assert_eq!(record.clock(Color::White), 1000);
    assert_eq!(record.clock(Color::Black), 2000);
    assert_eq!(record.last_move.unwrap().san, "e4");
    assert_eq!(
        record.updated_at.unwrap().to_rfc3339(),
        "2024-05-01T12:00:00+00:00"
    );
}

#[test]
fn test_player_lookup() {
    let record = sample();
    assert!(record.has_bot());
    assert!(record.is_bot(Color::Black));
    assert!(!record.is_bot(Color::White));
    assert_eq!(record.player(Color::White).unwrap().id, "alice");
}

#[test]
fn test_apply_leaves_absent_fields_alone() {
    let mut record = sample();
    record.apply(MatchUpdate {
        fen: Some("new-fen".into()),
        black_time: Some(42),
        ..Default::default()
    });

    assert_eq!(record.fen, "new-fen");
    assert_eq!(record.black_time, 42);
    assert_eq!(record.white_time, 300_000);
    assert!(record.last_move.is_none());
    assert!(!record.is_game_over);

    record.apply(MatchUpdate::game_over("0-1"));
    assert!(record.is_game_over);
    assert_eq!(record.result.as_deref(), Some("0-1"));
    assert!(record.updated_at.is_some());
    assert_eq!(record.fen, "new-fen");
}

#[test]
fn test_update_omits_unset_fields() {
    let update = MatchUpdate {
        white_time: Some(10),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "whiteTime": 10 }));
    assert!(MatchUpdate::default().is_empty());
    assert!(!update.is_empty());
}
