//! Authoritative game object: a position plus the history needed to judge
//! repetition and report what was played.

use crate::{
    board::Position,
    error::{FenError, MoveError},
    movegen::{has_legal_move, legal_moves},
    san::{move_to_san, parse_san},
    types::*,
    uci::{move_to_uci, parse_uci_move},
};

/// How a game stands after the last move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", tag = "kind"))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "*",
            GameStatus::Checkmate {
                winner: Color::White,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Black,
            } => "0-1",
            _ => "1/2-1/2",
        }
    }
}

/// Status of a single position, without repetition history.
pub fn position_status(pos: &Position) -> GameStatus {
    if !has_legal_move(pos) {
        return if pos.in_check(pos.side_to_move) {
            GameStatus::Checkmate {
                winner: pos.side_to_move.other(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if pos.is_fifty_move_draw() {
        return GameStatus::FiftyMoveRule;
    }
    if pos.is_insufficient_material() {
        return GameStatus::InsufficientMaterial;
    }
    GameStatus::Ongoing
}

/// A move as it was played, with the notations clients display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub from: String,
    pub to: String,
    pub san: String,
    pub uci: String,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    /// Zobrist keys of every position reached, the current one last.
    keys: Vec<u64>,
    played: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_position(position: Position) -> Self {
        let keys = vec![position.zobrist_key()];
        Self {
            position,
            keys,
            played: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn played(&self) -> &[PlayedMove] {
        &self.played
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Plays `mv` if it is legal here; the position is untouched otherwise.
    pub fn play(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        self.ensure_ongoing()?;
        if !self.legal_moves().contains(&mv) {
            return Err(MoveError::Illegal(move_to_uci(mv)));
        }

        let played = PlayedMove {
            mv,
            from: sq_to_coord(mv.from),
            to: sq_to_coord(mv.to),
            san: move_to_san(&self.position, mv),
            uci: move_to_uci(mv),
        };
        self.position.make_move(mv);
        self.keys.push(self.position.zobrist_key());
        self.played.push(played.clone());
        Ok(played)
    }

    pub fn play_uci(&mut self, txt: &str) -> Result<PlayedMove, MoveError> {
        self.ensure_ongoing()?;
        let mv = parse_uci_move(&self.position, txt)
            .ok_or_else(|| MoveError::Unparseable(txt.to_string()))?;
        self.play(mv)
    }

    pub fn play_san(&mut self, txt: &str) -> Result<PlayedMove, MoveError> {
        self.ensure_ongoing()?;
        let mv = parse_san(&self.position, txt)
            .ok_or_else(|| MoveError::Unparseable(txt.to_string()))?;
        self.play(mv)
    }

    /// Finished games accept no move text, parseable or not.
    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        match self.status() {
            GameStatus::Ongoing => Ok(()),
            status => Err(MoveError::GameOver(status)),
        }
    }

    /// Number of times the current position has occurred, this one included.
    pub fn repetitions(&self) -> usize {
        let current = self.keys.last().copied().unwrap_or_default();
        self.keys.iter().filter(|&&k| k == current).count()
    }

    pub fn status(&self) -> GameStatus {
        match position_status(&self.position) {
            GameStatus::Ongoing if self.repetitions() >= 3 => GameStatus::ThreefoldRepetition,
            status => status,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
