//! Plain text board dump.

use std::fmt;

use crate::board::Board;
use crate::types::*;

impl fmt::Display for Board {
    /// Ranks from the top (y = 15) down, one cell per square as
    /// `"{square}:{code}"`. Side 1 codes are uppercase, side 2 lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE as i8).rev() {
            for file in 0..BOARD_SIZE as i8 {
                let Some(square) = sq(file, rank) else {
                    continue;
                };
                if file > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_at(square) {
                    Some(pc) if pc.color == Color::White => {
                        write!(f, "{square:>3}:{}", pc.kind.abbrev().to_ascii_uppercase())?
                    }
                    Some(pc) => write!(f, "{square:>3}:{}", pc.kind.abbrev().to_ascii_lowercase())?,
                    None => write!(f, "{square:>3}:  ")?,
                }
            }
            writeln!(f)?;
        }
        let side = self.turn().number();
        match self.en_passant() {
            Some(ep) => writeln!(f, "side {side} to move, en passant on {}", ep.landing),
            None => writeln!(f, "side {side} to move"),
        }
    }
}
