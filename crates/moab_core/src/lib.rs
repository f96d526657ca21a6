pub mod board;
pub mod geometry;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod render;
pub mod squareset;
pub mod types;

// Re-export the rules core (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use perft::perft;
pub use position::*;
pub use squareset::SquareSet;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every Moab move selector
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Plies of look-ahead actually used
    pub depth: u8,
    /// Number of positions evaluated
    pub nodes: u64,
}

/// Trait that all Moab engines must implement.
///
/// The self-play driver only talks to this trait, so selectors can be
/// swapped without touching the game loop.
pub trait Engine: Send {
    /// Pick a move for the side to move in `board`.
    ///
    /// The engine works on its own copy; `board` is never changed.
    fn search(&mut self, board: &Board) -> SearchResult;

    /// Pick one of `options` for the piece waiting to promote on `square`.
    fn choose_promotion(
        &mut self,
        board: &Board,
        square: Square,
        options: &[PieceKind],
    ) -> PieceKind;

    /// Returns the engine's name for game records
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
