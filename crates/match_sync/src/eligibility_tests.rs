use super::*;
use crate::model::Player;

fn vs_bot(bot_color: Color) -> MatchRecord {
    MatchRecord::new(
        "m1",
        "host",
        vec![
            Player::human("host", bot_color.other()),
            Player::bot("bot", bot_color),
        ],
        60_000,
    )
}

fn skip(reason: SkipReason) -> Eligibility {
    Eligibility::Skip(reason)
}

#[test]
fn test_white_bot_schedules_for_creator() {
    let record = vs_bot(Color::White);
    assert_eq!(
        check(Some(&record), Some("host")),
        Eligibility::Schedule {
            bot_color: Color::White
        }
    );
}

#[test]
fn test_skips_when_match_or_user_missing() {
    let record = vs_bot(Color::White);
    assert_eq!(check(None, Some("host")), skip(SkipReason::NoMatch));
    assert_eq!(check(Some(&record), None), skip(SkipReason::NoLocalUser));
    assert_eq!(check(Some(&record), Some("")), skip(SkipReason::NoLocalUser));
}

#[test]
fn test_skips_finished_games() {
    let mut record = vs_bot(Color::White);
    record.is_game_over = true;
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::GameOver));

    // Not flagged yet, but Black is mated.
    let mut record = vs_bot(Color::Black);
    record.fen = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1".into();
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::GameOver));
}

#[test]
fn test_skips_malformed_records() {
    let mut record = vs_bot(Color::White);
    record.id.clear();
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::MissingMatchId));

    let mut record = vs_bot(Color::White);
    record.players.pop();
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::NotEnoughPlayers));

    let mut record = vs_bot(Color::White);
    record.fen = "not a fen".into();
    assert!(matches!(
        check(Some(&record), Some("host")),
        Eligibility::Skip(SkipReason::InvalidFen(_))
    ));
}

#[test]
fn test_skips_without_bot_or_off_turn() {
    let mut record = vs_bot(Color::White);
    record.players[1].is_bot = false;
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::NoBotPlayer));

    let record = vs_bot(Color::Black);
    assert_eq!(check(Some(&record), Some("host")), skip(SkipReason::NotBotsTurn));
}

#[test]
fn test_non_authority_never_schedules() {
    let mut record = vs_bot(Color::White);
    record.players = vec![Player::bot("b1", Color::White), Player::bot("b2", Color::Black)];

    for user in ["b1", "b2", "guest"] {
        let result = check(Some(&record), Some(user));
        assert_eq!(result, skip(SkipReason::NotAuthority), "{user}");
        assert!(!result.should_schedule());
    }
    assert!(check(Some(&record), Some("host")).should_schedule());
}
