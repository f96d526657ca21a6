//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p moab_core -- [depth] [position file]
//!
//! Examples:
//!   # Default: depth 2 from the bundled skirmish
//!   cargo flamegraph --example perft_bench -p moab_core
//!
//!   # Custom depth and position
//!   cargo flamegraph --example perft_bench -p moab_core -- 3 positions/skirmish.pos

use moab_core::{perft, Board};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

const SKIRMISH: &str = include_str!("../../../positions/skirmish.pos");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2);

    let loaded = match args.get(2) {
        Some(path) => Board::load_position(path),
        None => Board::from_position_str(SKIRMISH),
    };
    let mut board = match loaded {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Cannot load position: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = start.elapsed();
    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);

    println!("perft({depth}) = {nodes} nodes in {elapsed:.2?} ({:.0} nps)", nps);
    ExitCode::SUCCESS
}
