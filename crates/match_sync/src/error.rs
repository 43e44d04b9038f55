//! Error types for match synchronization
//!
//! Ineligibility is not an error (see [`crate::eligibility`]); these cover
//! records that cannot be read, moves that cannot be applied, store failures
//! and configuration problems.

use chess_core::{FenError, MoveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The record's board string does not parse
    #[error("invalid FEN in match record: {0}")]
    Fen(#[from] FenError),

    /// The authoritative game refused the move
    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("match {0} not found")]
    MatchNotFound(String),

    /// Backend failure reported by a [`crate::MatchStore`]
    #[error("match store error: {message}")]
    Store { message: String },

    /// The local game and the shared record disagree about the position
    #[error("match {match_id} out of sync: expected {expected}, record has {found}")]
    Desync {
        match_id: String,
        expected: String,
        found: String,
    },

    /// No move arrived within the allowed wait
    #[error("match {match_id} stalled after {plies} plies")]
    Stalled { match_id: String, plies: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for match synchronization
pub type SyncResult<T> = Result<T, SyncError>;
