//! Heuristic Moab Engine
//!
//! One-ply selection over a six-term static evaluation. Every legal move is
//! tried, scored and undone; the best ranked move for the side to move wins
//! and exact ties are broken at random.

mod config;
mod eval;
mod search;

use moab_core::{Board, Engine, PieceKind, SearchResult, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

pub use config::{ConfigError, HeuristicConfig};
pub use eval::{evaluate, Rank, Score};
pub use search::{best_move, best_promotion, SearchOutcome};

/// Engine wrapper around [`best_move`] and [`best_promotion`].
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    config: HeuristicConfig,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl HeuristicEngine {
    pub fn new(config: HeuristicConfig) -> Self {
        if config.depth != 1 {
            warn!(
                depth = config.depth,
                "configured search depth is ignored; selection looks one ply ahead"
            );
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes: 0,
        }
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        let mut board_copy = board.clone();
        let outcome = best_move(&mut board_copy, &self.config, &mut self.rng);
        self.nodes += outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            depth: 1,
            nodes: outcome.nodes,
        }
    }

    fn choose_promotion(
        &mut self,
        board: &Board,
        square: Square,
        options: &[PieceKind],
    ) -> PieceKind {
        let mut board_copy = board.clone();
        best_promotion(&mut board_copy, square, options, &self.config)
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
