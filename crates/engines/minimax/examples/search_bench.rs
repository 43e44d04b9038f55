//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --profile profiling --example search_bench -p minimax_bot -- [depth] [fen]
//!
//! Without a FEN, every suite position is searched at the given depth
//! (default 3). Seeded, so repeated runs visit the same nodes.

use chess_core::{move_to_san, Position};
use minimax_bot::pick_best_move;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::time::{Duration, Instant};

const SUITE: &[(&str, &str)] = &[
    ("Starting position", chess_core::START_FEN),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Promotion race",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ),
    (
        "Italian middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => SUITE.to_vec(),
    };

    println!("=== Minimax Search Benchmark (depth {depth}) ===");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;
    let mut rng = StdRng::seed_from_u64(0);

    for (name, fen) in positions {
        let mut pos = match Position::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{name}: bad FEN: {e}");
                continue;
            }
        };

        let start = Instant::now();
        let outcome = pick_best_move(&mut pos, depth, &mut rng);
        let elapsed = start.elapsed();

        total_nodes += outcome.nodes;
        total_time += elapsed;

        let best = outcome
            .best_move
            .map(|(mv, score)| format!("{} ({score:+})", move_to_san(&pos, mv)))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "{name:.<30} {best:<14} {:>10} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            outcome.nodes,
            nps(outcome.nodes, elapsed)
        );
    }

    println!();
    println!("{:=<80}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
