//! Bot configuration, loaded from TOML.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;
use std::time::Duration;

use crate::error::{SyncError, SyncResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Search depth in plies
    pub search_depth: u8,
    /// Think delay is drawn uniformly from `think_min_ms..think_max_ms`
    pub think_min_ms: u64,
    pub think_max_ms: u64,
    /// Seed for delays and tie-breaks (None = OS entropy)
    pub seed: Option<u64>,
    /// Starting clock for each side in new local matches
    pub initial_clock_ms: u64,
    /// Local matches are adjudicated drawn after this many plies
    pub max_plies: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            think_min_ms: 500,
            think_max_ms: 1000,
            seed: None,
            initial_clock_ms: 600_000,
            max_plies: 200,
        }
    }
}

impl BotConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> SyncResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> SyncResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SyncResult<()> {
        if self.search_depth == 0 {
            return Err(SyncError::InvalidConfig {
                message: "search_depth must be at least 1".into(),
            });
        }
        if self.think_min_ms >= self.think_max_ms {
            return Err(SyncError::InvalidConfig {
                message: format!(
                    "empty think range {}..{} ms",
                    self.think_min_ms, self.think_max_ms
                ),
            });
        }
        if self.max_plies == 0 {
            return Err(SyncError::InvalidConfig {
                message: "max_plies must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn think_range(&self) -> Range<u64> {
        self.think_min_ms..self.think_max_ms
    }

    /// Longest delay the controller can draw.
    pub fn max_think(&self) -> Duration {
        Duration::from_millis(self.think_max_ms)
    }

    /// Random source for the controller: seeded when configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
