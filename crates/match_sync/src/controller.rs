//! Per-match bot controller.
//!
//! Turns "board changed" events into at most one pending bot move:
//! eligibility decides, [`ThinkTimer`] delays, [`commit`] writes.

use chess_core::Color;
use minimax_bot::MinimaxBot;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::commit;
use crate::config::BotConfig;
use crate::eligibility::{self, Eligibility, SkipReason};
use crate::model::{MatchRecord, Player};
use crate::scheduler::{draw_delay, ThinkTimer};
use crate::store::MatchStore;

/// What the controller did with an observed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing eligibility looks at has changed since last time
    Unchanged,
    Skipped(SkipReason),
    Scheduled { bot_color: Color, delay: Duration },
}

/// Runs bot logic for one match on behalf of the local client.
pub struct BotController<S: MatchStore + ?Sized> {
    store: Arc<S>,
    local_user: Option<String>,
    config: BotConfig,
    rng: StdRng,
    timer: ThinkTimer,
    last_seen: Option<Observed>,
}

/// The parts of a record eligibility depends on. Clock and last-move
/// writes alone do not make the controller re-evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
    id: String,
    fen: String,
    is_game_over: bool,
    players: Vec<Player>,
    creator_id: String,
}

impl From<&MatchRecord> for Observed {
    fn from(r: &MatchRecord) -> Self {
        Self {
            id: r.id.clone(),
            fen: r.fen.clone(),
            is_game_over: r.is_game_over,
            players: r.players.clone(),
            creator_id: r.creator_id.clone(),
        }
    }
}

impl<S: MatchStore + ?Sized + 'static> BotController<S> {
    pub fn new(store: Arc<S>, local_user: Option<String>, config: BotConfig) -> Self {
        let rng = config.rng();
        Self {
            store,
            local_user,
            config,
            rng,
            timer: ThinkTimer::new(),
            last_seen: None,
        }
    }

    /// Reacts to the latest observed record.
    ///
    /// A changed board always cancels the pending move first; the new
    /// record then decides whether another one is scheduled. Must be
    /// called from within a tokio runtime.
    pub fn on_board_changed(&mut self, record: Option<&MatchRecord>) -> Reaction {
        let key = record.map(Observed::from);
        if key == self.last_seen {
            return Reaction::Unchanged;
        }
        self.last_seen = key;

        if self.timer.cancel() {
            debug!("board changed, pending bot move cancelled");
        }

        let bot_color = match eligibility::check(record, self.local_user.as_deref()) {
            Eligibility::Schedule { bot_color } => bot_color,
            Eligibility::Skip(reason) => {
                debug!(?reason, "bot move not scheduled");
                return Reaction::Skipped(reason);
            }
        };
        let Some(record) = record.cloned() else {
            return Reaction::Skipped(SkipReason::NoMatch);
        };

        let delay = draw_delay(&mut self.rng, self.config.think_range());
        let seed: u64 = self.rng.gen();
        let depth = self.config.search_depth;
        let store = Arc::clone(&self.store);

        info!(
            match_id = %record.id,
            color = %bot_color,
            delay_ms = delay.as_millis() as u64,
            "bot move scheduled"
        );
        self.timer.schedule(delay, async move {
            let mut engine = MinimaxBot::seeded(seed);
            commit::play_bot_turn(store.as_ref(), &record, &mut engine, depth, delay).await;
        });

        Reaction::Scheduled { bot_color, delay }
    }

    pub fn has_pending_move(&self) -> bool {
        self.timer.is_pending()
    }

    /// Cancels any pending move.
    pub fn shutdown(&mut self) {
        if self.timer.cancel() {
            debug!("controller shut down with a pending bot move");
        }
    }

    /// Follows a match subscription until the store closes it.
    pub async fn run(mut self, mut updates: watch::Receiver<Option<MatchRecord>>) {
        loop {
            let snapshot = updates.borrow_and_update().clone();
            self.on_board_changed(snapshot.as_ref());
            if updates.changed().await.is_err() {
                break;
            }
        }
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
