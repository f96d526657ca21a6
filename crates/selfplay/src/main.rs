//! Self-play CLI
//!
//! Load a position, let the heuristic engine play both sides and report the
//! result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heuristic_engine::{HeuristicConfig, HeuristicEngine};
use moab_core::Board;
use selfplay::{GameConfig, GameRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position file (`KIND SQUARE` lines, blank line between the sides)
    #[arg(short, long)]
    position: PathBuf,

    /// Engine configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many moves
    #[arg(short, long, default_value_t = 200)]
    max_moves: u32,

    /// Seed for the tie-break RNG, overriding the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the game record as JSON
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Write the final position in the position text format
    #[arg(long)]
    save_final: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => HeuristicConfig::load(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => HeuristicConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut board = Board::load_position(&args.position)
        .with_context(|| format!("loading position {}", args.position.display()))?;
    println!("{board}");

    // Side 2 draws from the next seed
    let black_config = HeuristicConfig {
        seed: config.seed.map(|s| s.wrapping_add(1)),
        ..config.clone()
    };
    let mut white = HeuristicEngine::new(config);
    let mut black = HeuristicEngine::new(black_config);

    let runner = GameRunner::new(GameConfig {
        max_moves: args.max_moves,
    });
    let record = runner
        .play_game(&mut board, &mut white, &mut black)
        .context("engine proposed an illegal move")?;

    println!("{board}");
    println!("{}", record.summary());

    if let Some(path) = &args.record {
        record
            .save(path)
            .with_context(|| format!("writing game record {}", path.display()))?;
    }
    if let Some(path) = &args.save_final {
        board
            .save_position(path)
            .with_context(|| format!("writing final position {}", path.display()))?;
    }
    Ok(())
}
