//! Match Sync for the minimax bot
//!
//! Connects [`minimax_bot`] to a shared match record:
//! - Eligibility: should this client move for the bot right now?
//! - Scheduling: a cancellable 500-1000 ms "thinking" delay
//! - Commit: replay the move on an authoritative game and write one update
//!
//! # Usage
//!
//! ```bash
//! # Bot vs bot self-play in an in-memory store
//! cargo run -p match_sync --bin bot_match -- --seed 7 --max-plies 80
//! ```

pub mod commit;
pub mod config;
pub mod controller;
pub mod eligibility;
mod error;
mod model;
pub mod runner;
pub mod scheduler;
pub mod store;

pub use config::BotConfig;
pub use controller::{BotController, Reaction};
pub use eligibility::{Eligibility, SkipReason};
pub use error::{SyncError, SyncResult};
pub use model::*;
pub use runner::{LocalMatch, MatchSummary};
pub use scheduler::ThinkTimer;
pub use store::{InMemoryMatchStore, MatchStore};
