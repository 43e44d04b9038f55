//! Picks the bot's move and writes it to the shared record.
//!
//! The move is replayed on an authoritative [`Game`] built from the record
//! before anything is written; if that fails, nothing is written.

use chess_core::{Color, Engine, Game, Move, PlayedMove, Position, SearchLimits};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::SyncResult;
use crate::model::{LastMove, MatchRecord, MatchUpdate};
use crate::store::MatchStore;

/// Runs one search on the record's position. `None` when there is no legal move.
pub fn select_move<E: Engine + ?Sized>(engine: &mut E, pos: &Position, depth: u8) -> Option<Move> {
    let result = engine.search(pos, SearchLimits::depth(depth));
    debug!(
        engine = engine.name(),
        nodes = result.nodes,
        score = result.score,
        "search finished"
    );
    result.best_move
}

/// Builds the single update that records `mv` on `record`.
///
/// The mover's clock is charged `thinking`, saturating at zero.
pub fn build_update(
    record: &MatchRecord,
    mv: Move,
    thinking: Duration,
    now: DateTime<Utc>,
) -> SyncResult<(MatchUpdate, PlayedMove)> {
    let mut game = Game::from_fen(&record.fen)?;
    let mover = game.side_to_move();
    let played = game.play(mv)?;

    let spent = u64::try_from(thinking.as_millis()).unwrap_or(u64::MAX);
    let remaining = record.clock(mover).saturating_sub(spent);
    let (white_time, black_time) = match mover {
        Color::White => (remaining, record.black_time),
        Color::Black => (record.white_time, remaining),
    };

    let update = MatchUpdate {
        fen: Some(game.fen()),
        last_move: Some(LastMove {
            from: played.from.clone(),
            to: played.to.clone(),
            san: played.san.clone(),
        }),
        white_time: Some(white_time),
        black_time: Some(black_time),
        updated_at: Some(now),
        ..Default::default()
    };
    Ok((update, played))
}

/// Validates `mv` against the record and writes it.
pub async fn commit_move<S: MatchStore + ?Sized>(
    store: &S,
    record: &MatchRecord,
    mv: Move,
    thinking: Duration,
) -> SyncResult<PlayedMove> {
    let (update, played) = build_update(record, mv, thinking, Utc::now())?;
    store.update(&record.id, update).await?;
    Ok(played)
}

/// One full bot turn: search, then commit.
///
/// Failures are logged and swallowed; the next board change retries
/// naturally. Returns the move that was written, if any.
pub async fn play_bot_turn<S, E>(
    store: &S,
    record: &MatchRecord,
    engine: &mut E,
    depth: u8,
    thinking: Duration,
) -> Option<PlayedMove>
where
    S: MatchStore + ?Sized,
    E: Engine + ?Sized,
{
    let pos = match Position::from_fen(&record.fen) {
        Ok(pos) => pos,
        Err(e) => {
            error!(match_id = %record.id, error = %e, "cannot read board, bot move dropped");
            return None;
        }
    };

    let Some(mv) = select_move(engine, &pos, depth) else {
        debug!(match_id = %record.id, "no legal move for bot");
        return None;
    };

    match commit_move(store, record, mv, thinking).await {
        Ok(played) => {
            info!(match_id = %record.id, san = %played.san, fen = %record.fen, "bot move committed");
            Some(played)
        }
        Err(e) => {
            error!(match_id = %record.id, error = %e, "bot move commit failed");
            None
        }
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod commit_tests;
