//! Decides whether the local client should schedule a bot move.
//!
//! Pure function of the observed record and the local user id; no timers
//! and no I/O, so every branch is unit-testable.

use chess_core::{position_status, Color, FenError, Position};

use crate::model::MatchRecord;

/// Why no bot move was scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoMatch,
    /// The record is flagged over, or the position itself is terminal
    GameOver,
    NoLocalUser,
    MissingMatchId,
    NotEnoughPlayers,
    NoBotPlayer,
    InvalidFen(FenError),
    NotBotsTurn,
    /// Another client is the match authority
    NotAuthority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Schedule { bot_color: Color },
    Skip(SkipReason),
}

impl Eligibility {
    pub fn should_schedule(&self) -> bool {
        matches!(self, Eligibility::Schedule { .. })
    }
}

/// Checks every precondition for the bot to move, cheapest first.
pub fn check(record: Option<&MatchRecord>, local_user: Option<&str>) -> Eligibility {
    use SkipReason::*;

    let Some(record) = record else {
        return Eligibility::Skip(NoMatch);
    };
    if record.is_game_over {
        return Eligibility::Skip(GameOver);
    }
    let Some(local_user) = local_user.filter(|u| !u.is_empty()) else {
        return Eligibility::Skip(NoLocalUser);
    };
    if record.id.is_empty() {
        return Eligibility::Skip(MissingMatchId);
    }
    if record.players.len() < 2 {
        return Eligibility::Skip(NotEnoughPlayers);
    }
    if !record.has_bot() {
        return Eligibility::Skip(NoBotPlayer);
    }

    let pos = match Position::from_fen(&record.fen) {
        Ok(pos) => pos,
        Err(e) => return Eligibility::Skip(InvalidFen(e)),
    };
    if position_status(&pos).is_over() {
        return Eligibility::Skip(GameOver);
    }

    let bot_color = pos.side_to_move;
    if !record.is_bot(bot_color) {
        return Eligibility::Skip(NotBotsTurn);
    }
    if record.creator_id != local_user {
        return Eligibility::Skip(NotAuthority);
    }

    Eligibility::Schedule { bot_color }
}

#[cfg(test)]
#[path = "eligibility_tests.rs"]
mod eligibility_tests;
