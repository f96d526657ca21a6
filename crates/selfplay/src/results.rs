//! Game record storage

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Side 2 was checkmated
    Side1Wins,
    /// Side 1 was checkmated
    Side2Wins,
    Stalemate,
    /// The move cap was reached first
    MoveLimit,
}

/// One committed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1 or 2
    pub side: u8,
    pub from: u8,
    pub to: u8,
    /// Kind token of the moving piece
    pub piece: String,
    /// Kind token chosen on promotion, if any
    pub promotion: Option<String>,
}

/// A complete self-play game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Starting position in the position text format
    pub start_position: String,
    pub moves: Vec<MoveRecord>,
    pub result: GameResult,
    /// Final position in the position text format
    pub final_position: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to access game record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode game record: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameRecord {
    /// Save record to JSON file
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// One-line summary for the console
    pub fn summary(&self) -> String {
        let outcome = match self.result {
            GameResult::Side1Wins => "side 1 wins by checkmate",
            GameResult::Side2Wins => "side 2 wins by checkmate",
            GameResult::Stalemate => "stalemate",
            GameResult::MoveLimit => "move limit reached",
        };
        format!(
            "{} vs {}: {} after {} moves",
            self.white,
            self.black,
            outcome,
            self.moves.len()
        )
    }
}
