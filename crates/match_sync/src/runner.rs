//! Local bot-vs-bot match driven through the shared-record path.
//!
//! Every move goes through eligibility, the think delay and the commit
//! step exactly as it would for an online match; the runner only watches
//! the record, keeps its own [`Game`] for repetition tracking, and marks
//! the match over.

use chess_core::{Color, Game, GameStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::controller::BotController;
use crate::error::{SyncError, SyncResult};
use crate::model::{MatchRecord, MatchUpdate, Player};
use crate::store::{InMemoryMatchStore, MatchStore};

const HOST_ID: &str = "local-host";

/// Extra wait beyond the longest think delay before declaring a stall.
const STALL_GRACE: Duration = Duration::from_secs(5);

/// Outcome of a finished local match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    /// Moves in SAN, White first
    pub moves: Vec<String>,
    pub final_fen: String,
    pub status: GameStatus,
    /// PGN result token
    pub result: String,
    /// True when the ply limit ended the game
    pub adjudicated: bool,
    pub white_time: u64,
    pub black_time: u64,
}

impl MatchSummary {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// PGN movetext: numbered moves followed by the result token.
    pub fn pgn_movetext(&self) -> String {
        let mut out = String::new();
        for (i, san) in self.moves.iter().enumerate() {
            if i % 2 == 0 {
                out.push_str(&format!("{}. ", i / 2 + 1));
            }
            out.push_str(san);
            out.push(' ');
        }
        out.push_str(&self.result);
        out
    }

    /// Save summary to JSON file
    pub fn save(&self, path: &Path) -> SyncResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load(path: &Path) -> SyncResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Plays one bot-vs-bot match in an in-memory store.
pub struct LocalMatch {
    config: BotConfig,
    match_id: String,
}

impl LocalMatch {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            match_id: "local-1".to_string(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.match_id = id.to_string();
        self
    }

    pub async fn play(&self) -> SyncResult<MatchSummary> {
        self.config.validate()?;

        let store = Arc::new(InMemoryMatchStore::new());
        let record = MatchRecord::new(
            &self.match_id,
            HOST_ID,
            vec![
                Player::bot("white-bot", Color::White),
                Player::bot("black-bot", Color::Black),
            ],
            self.config.initial_clock_ms,
        );
        let mut updates = store.subscribe(&self.match_id).await?;
        store.insert(record).await;

        let mut controller =
            BotController::new(Arc::clone(&store), Some(HOST_ID.to_string()), self.config.clone());
        let mut game = Game::new();
        let wait = self.config.max_think() + STALL_GRACE;

        info!(match_id = %self.match_id, depth = self.config.search_depth, "local match started");

        let (status, adjudicated) = loop {
            let snapshot = updates.borrow_and_update().clone();
            let record = snapshot.ok_or_else(|| SyncError::MatchNotFound(self.match_id.clone()))?;

            self.follow(&mut game, &record)?;

            let status = game.status();
            if status.is_over() {
                break (status, false);
            }
            if game.played().len() >= self.config.max_plies {
                break (status, true);
            }

            controller.on_board_changed(Some(&record));

            match tokio::time::timeout(wait, updates.changed()).await {
                Ok(Ok(())) => {}
                Ok(Err(_)) => return Err(SyncError::MatchNotFound(self.match_id.clone())),
                Err(_) => {
                    controller.shutdown();
                    return Err(SyncError::Stalled {
                        match_id: self.match_id.clone(),
                        plies: game.played().len(),
                    });
                }
            }
        };
        controller.shutdown();

        let result = if adjudicated {
            warn!(match_id = %self.match_id, plies = game.played().len(), "ply limit reached, adjudicated draw");
            "1/2-1/2"
        } else {
            status.result_token()
        };
        store
            .update(&self.match_id, MatchUpdate::game_over(result))
            .await?;

        let final_record = store.fetch(&self.match_id).await?;
        info!(match_id = %self.match_id, result, ?status, "local match finished");

        Ok(MatchSummary {
            match_id: self.match_id.clone(),
            moves: game.played().iter().map(|p| p.san.clone()).collect(),
            final_fen: game.fen(),
            status,
            result: result.to_string(),
            adjudicated,
            white_time: final_record.white_time,
            black_time: final_record.black_time,
        })
    }

    /// Replays the record's last move on `game` if the record is ahead.
    fn follow(&self, game: &mut Game, record: &MatchRecord) -> SyncResult<()> {
        if record.fen == game.fen() {
            return Ok(());
        }
        if let Some(last) = &record.last_move {
            game.play_san(&last.san)?;
        }
        if record.fen != game.fen() {
            return Err(SyncError::Desync {
                match_id: record.id.clone(),
                expected: game.fen(),
                found: record.fen.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
