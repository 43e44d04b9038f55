//! Error types for position parsing and move application.

use thiserror::Error;

/// Errors raised while parsing Forsyth-Edwards Notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),

    #[error("expected 8 ranks in board field, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),

    #[error("{0} king missing or duplicated")]
    KingCount(crate::Color),
}

/// Errors raised when a move cannot be applied to a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {0} is not legal in this position")]
    Illegal(String),

    #[error("could not parse move notation '{0}'")]
    Unparseable(String),

    #[error("game is already over: {0:?}")]
    GameOver(crate::GameStatus),
}
