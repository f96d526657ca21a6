//! Game runner for self-play between engines

use moab_core::{Board, CheckmateStatus, Color, Engine, MoveError, MoveOutcome};
use tracing::{debug, info};

use crate::results::{GameRecord, GameResult, MoveRecord};

/// Configuration for a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum moves (plies) before the game is stopped
    pub max_moves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_moves: 200 }
    }
}

/// Plays games between two engines from a given position
pub struct GameRunner {
    config: GameConfig,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Play one game on `board`, which is left in the final position.
    ///
    /// Every move goes through [`Board::play`], so an engine that proposes
    /// an illegal move ends the game with that error.
    pub fn play_game(
        &self,
        board: &mut Board,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, MoveError> {
        white.new_game();
        black.new_game();
        let start_position = board.to_position_string();
        let mut moves = Vec::new();

        let result = 'game: {
            for _ in 0..self.config.max_moves {
                let mover = board.turn();
                let engine: &mut dyn Engine = match mover {
                    Color::White => &mut *white,
                    Color::Black => &mut *black,
                };

                let Some(mv) = engine.search(board).best_move else {
                    // No legal moves - checkmate or stalemate
                    break 'game match board.checkmate_status(mover) {
                        CheckmateStatus::Checkmate => mated(mover),
                        _ => GameResult::Stalemate,
                    };
                };
                let piece = board.piece_at(mv.from).ok_or(MoveError::EmptySquare(mv.from))?;

                let mut promotion = None;
                let mut outcome = board.play(mv.from, mv.to, None)?;
                if let MoveOutcome::PendingPromotion(options) = &outcome {
                    let kind = engine.choose_promotion(board, mv.to, options);
                    promotion = Some(kind.token().to_string());
                    outcome = board.promote(mv.to, kind)?;
                }
                debug!(side = mover.number(), "played {mv} ({outcome:?})");
                moves.push(MoveRecord {
                    side: mover.number(),
                    from: mv.from,
                    to: mv.to,
                    piece: piece.kind.token().to_string(),
                    promotion,
                });

                match outcome {
                    MoveOutcome::Checkmate => break 'game mated(mover.other()),
                    MoveOutcome::Stalemate => break 'game GameResult::Stalemate,
                    _ => {}
                }
            }
            GameResult::MoveLimit
        };

        let record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            start_position,
            moves,
            result,
            final_position: board.to_position_string(),
        };
        info!("{}", record.summary());
        Ok(record)
    }
}

/// Result when `loser` has been checkmated
fn mated(loser: Color) -> GameResult {
    match loser {
        Color::White => GameResult::Side2Wins,
        Color::Black => GameResult::Side1Wins,
    }
}

#[cfg(test)]
#[path = "game_runner_tests.rs"]
mod game_runner_tests;
