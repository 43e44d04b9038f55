//! Shared match record and the partial updates written to it.
//!
//! Only the fields the bot reads or writes are modelled. Field names
//! serialize in camelCase to match the shared record.

use chess_core::{Color, START_FEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub color: Color,
    #[serde(default)]
    pub is_bot: bool,
}

impl Player {
    pub fn human(id: &str, color: Color) -> Self {
        Self {
            id: id.to_string(),
            color,
            is_bot: false,
        }
    }

    pub fn bot(id: &str, color: Color) -> Self {
        Self {
            id: id.to_string(),
            color,
            is_bot: true,
        }
    }
}

/// Descriptor of the most recent move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub from: String,
    pub to: String,
    pub san: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub players: Vec<Player>,
    /// The one client allowed to run bot logic for this match
    pub creator_id: String,
    pub fen: String,
    /// Remaining clock, milliseconds
    pub white_time: u64,
    pub black_time: u64,
    #[serde(default)]
    pub is_game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<LastMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    /// A fresh match at the standard start position with equal clocks.
    pub fn new(id: &str, creator_id: &str, players: Vec<Player>, clock_ms: u64) -> Self {
        Self {
            id: id.to_string(),
            players,
            creator_id: creator_id.to_string(),
            fen: START_FEN.to_string(),
            white_time: clock_ms,
            black_time: clock_ms,
            is_game_over: false,
            result: None,
            last_move: None,
            updated_at: None,
        }
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    pub fn has_bot(&self) -> bool {
        self.players.iter().any(|p| p.is_bot)
    }

    pub fn is_bot(&self, color: Color) -> bool {
        self.player(color).is_some_and(|p| p.is_bot)
    }

    pub fn clock(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white_time,
            Color::Black => self.black_time,
        }
    }

    /// Applies a partial update; absent fields keep their current value.
    pub fn apply(&mut self, update: MatchUpdate) {
        if let Some(fen) = update.fen {
            self.fen = fen;
        }
        if let Some(last_move) = update.last_move {
            self.last_move = Some(last_move);
        }
        if let Some(t) = update.white_time {
            self.white_time = t;
        }
        if let Some(t) = update.black_time {
            self.black_time = t;
        }
        if let Some(over) = update.is_game_over {
            self.is_game_over = over;
        }
        if let Some(result) = update.result {
            self.result = Some(result);
        }
        if let Some(at) = update.updated_at {
            self.updated_at = Some(at);
        }
    }
}

/// Partial update to a [`MatchRecord`], written as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<LastMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_game_over: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchUpdate {
    /// Marks the match finished with a PGN result token.
    pub fn game_over(result: &str) -> Self {
        Self {
            is_game_over: Some(true),
            result: Some(result.to_string()),
            updated_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
