use super::*;
use crate::model::Player;
use chess_core::Color;

fn record(id: &str) -> MatchRecord {
    MatchRecord::new(
        id,
        "host",
        vec![Player::human("host", Color::White), Player::bot("bot", Color::Black)],
        1000,
    )
}

#[tokio::test]
async fn test_insert_then_fetch() {
    let store = InMemoryMatchStore::new();
    assert!(matches!(store.fetch("m1").await, Err(SyncError::MatchNotFound(_))));

    store.insert(record("m1")).await;
    assert_eq!(store.fetch("m1").await.unwrap(), record("m1"));
    assert_eq!(store.revision("m1").await, Some(1));
    assert_eq!(store.revision("other").await, None);
}

#[tokio::test]
async fn test_update_merges_and_bumps_revision() {
    let store = InMemoryMatchStore::new();
    store.insert(record("m1")).await;

    store
        .update(
            "m1",
            MatchUpdate {
                white_time: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let fetched = store.fetch("m1").await.unwrap();
    assert_eq!(fetched.white_time, 5);
    assert_eq!(fetched.black_time, 1000);
    assert_eq!(store.revision("m1").await, Some(2));
}

#[tokio::test]
async fn test_update_unknown_match_fails() {
    let store = InMemoryMatchStore::new();
    let err = store.update("ghost", MatchUpdate::game_over("1-0")).await;
    assert!(matches!(err, Err(SyncError::MatchNotFound(id)) if id == "ghost"));
}

#[tokio::test]
async fn test_subscribers_see_every_write() {
    let store = InMemoryMatchStore::new();
    let mut rx = store.subscribe("m1").await.unwrap();
    assert!(rx.borrow_and_update().is_none());

    store.insert(record("m1")).await;
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().as_ref().unwrap().white_time, 1000);

    store.update("m1", MatchUpdate::game_over("1/2-1/2")).await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().as_ref().unwrap().is_game_over);

    assert!(store.remove("m1").await);
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_none());
    assert!(!store.remove("m1").await);
}
