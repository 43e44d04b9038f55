//! Bot Match CLI
//!
//! Plays the minimax bot against itself through the shared-record path and
//! prints the game as PGN movetext.

use anyhow::{Context, Result};
use clap::Parser;
use match_sync::{BotConfig, LocalMatch};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bot_match", about = "Minimax bot self-play over a shared match record")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for think delays and tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Adjudicate a draw after this many plies
    #[arg(long)]
    max_plies: Option<usize>,

    /// Write the match summary as JSON
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long)]
    think_min_ms: Option<u64>,

    #[arg(long)]
    think_max_ms: Option<u64>,

    /// Search depth in plies
    #[arg(long, short)]
    depth: Option<u8>,
}

impl Args {
    fn into_config(self) -> Result<(BotConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => BotConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
        if let Some(ms) = self.think_min_ms {
            config.think_min_ms = ms;
        }
        if let Some(ms) = self.think_max_ms {
            config.think_max_ms = ms;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        config.validate().context("invalid bot configuration")?;
        Ok((config, self.output))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, output) = Args::parse().into_config()?;
    let summary = LocalMatch::new(config).play().await?;

    println!("{}", summary.pgn_movetext());
    println!();
    println!("Final FEN: {}", summary.final_fen);
    println!(
        "Result: {} ({:?}{}) after {} plies",
        summary.result,
        summary.status,
        if summary.adjudicated { ", adjudicated" } else { "" },
        summary.plies()
    );

    if let Some(path) = output {
        summary
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Summary saved to {}", path.display());
    }
    Ok(())
}
