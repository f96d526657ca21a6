//! Position text format.
//!
//! One `KIND SQUARE` pair per line, side 1's pieces first, then a single blank
//! line, then side 2's pieces:
//!
//! ```text
//! KING 7
//! PAWN 23
//!
//! KING 247
//! ```
//!
//! `KIND` is the uppercase kind token and `SQUARE` the row-major index.
//! The format carries no turn; loaded boards start with side 1 to move.

use std::fmt::Write as _;
use std::path::Path;

use crate::board::Board;
use crate::types::*;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("line {line}: {source}")]
    UnknownKind {
        line: usize,
        #[source]
        source: UnknownKind,
    },
    #[error("line {line}: square {value} is off the board")]
    SquareOutOfRange { line: usize, value: i64 },
    #[error("line {line}: expected `KIND SQUARE`, found {text:?}")]
    Malformed { line: usize, text: String },
    #[error("line {line}: square {square} is already occupied")]
    OccupiedSquare { line: usize, square: Square },
    #[error("failed to access position file: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed `KIND SQUARE` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// 1-based line number in the source text.
    pub line: usize,
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

/// Parse the text format into placements in file order.
pub fn parse_position(text: &str) -> Result<Vec<Placement>, PositionError> {
    let mut placements = Vec::new();
    let mut color = Color::White;
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            color = Color::Black;
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (Some(token), Some(square), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(PositionError::Malformed {
                line,
                text: raw.to_string(),
            });
        };
        let kind: PieceKind = token
            .parse()
            .map_err(|source| PositionError::UnknownKind { line, source })?;
        let value: i64 = square.parse().map_err(|_| PositionError::Malformed {
            line,
            text: raw.to_string(),
        })?;
        if !(0..NUM_SQUARES as i64).contains(&value) {
            return Err(PositionError::SquareOutOfRange { line, value });
        }
        placements.push(Placement {
            line,
            color,
            kind,
            square: value as Square,
        });
    }
    Ok(placements)
}

impl Board {
    /// Build a board from the position text format.
    pub fn from_position_str(text: &str) -> Result<Board, PositionError> {
        let mut board = Board::new(Color::White);
        board.load_placements(text)?;
        Ok(board)
    }

    /// Read a position file into a fresh board.
    pub fn load_position(path: impl AsRef<Path>) -> Result<Board, PositionError> {
        let text = std::fs::read_to_string(path)?;
        Board::from_position_str(&text)
    }

    /// Replace the board contents with the placements in `text`. On error
    /// the board is left as it was.
    pub fn load_placements(&mut self, text: &str) -> Result<(), PositionError> {
        let mut fresh = Board::new(self.turn());
        for p in parse_position(text)? {
            if fresh.piece_at(p.square).is_some() {
                return Err(PositionError::OccupiedSquare {
                    line: p.line,
                    square: p.square,
                });
            }
            fresh.place_piece(p.square, Piece::new(p.color, p.kind));
        }
        *self = fresh;
        Ok(())
    }

    /// Emit the board in the position text format, squares ascending.
    pub fn to_position_string(&self) -> String {
        let mut out = String::new();
        for color in [Color::White, Color::Black] {
            if color == Color::Black {
                out.push('\n');
            }
            for square in self.pieces_of(color) {
                if let Some(pc) = self.piece_at(square) {
                    let _ = writeln!(out, "{} {}", pc.kind.token(), square);
                }
            }
        }
        out
    }

    /// Write the board to `path` in the position text format.
    pub fn save_position(&self, path: impl AsRef<Path>) -> Result<(), PositionError> {
        std::fs::write(path, self.to_position_string())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
