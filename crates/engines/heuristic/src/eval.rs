//! Six-term static evaluation.
//!
//! Every term is from side 1's point of view: positive favours White,
//! negative favours Black.

use std::cmp::Ordering;

use moab_core::{
    defended_squares, raw_squares, to_coords, Board, CheckmateStatus, Color, PieceKind, SquareSet,
    BOARD_SIZE, NUM_SQUARES,
};

use crate::config::HeuristicConfig;

/// Full evaluation of a position, most significant term first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Score {
    /// +1 when side 2 is mated, -1 when side 1 is mated
    pub mate: i32,
    /// Material balance plus the opponent's exchange weaknesses
    pub material: i32,
    /// Exchange weaknesses of the side to move
    pub threat: i32,
    /// Advanced opponent pieces with neither attacker nor defender
    pub hanging: i32,
    /// Nearness of promotable pieces to their promotion squares
    pub advancement: f64,
    /// Raw move count
    pub mobility: i32,
}

/// Lexicographic ranking of a [`Score`], with the three minor terms folded
/// into one weighted real.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rank {
    pub mate: i32,
    pub material: i32,
    pub threat: i32,
    pub positional: f64,
}

impl Score {
    pub fn rank(&self, config: &HeuristicConfig) -> Rank {
        Rank {
            mate: self.mate,
            material: self.material,
            threat: self.threat,
            positional: self.hanging as f64
                + config.promotion_weight * self.advancement
                + config.space_weight * self.mobility as f64,
        }
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mate
            .cmp(&other.mate)
            .then(self.material.cmp(&other.material))
            .then(self.threat.cmp(&other.threat))
            .then(self.positional.total_cmp(&other.positional))
    }
}

/// Evaluate `board` as it stands. The board is never changed.
pub fn evaluate(board: &Board) -> Score {
    let mover = board.turn();
    if board.clone().checkmate_status(mover) == CheckmateStatus::Checkmate {
        let mate = match mover {
            Color::White => -1,
            Color::Black => 1,
        };
        return Score {
            mate,
            ..Score::default()
        };
    }

    let mut cheapest_attacker: [Option<i32>; NUM_SQUARES] = [None; NUM_SQUARES];
    let mut defended = SquareSet::EMPTY;
    let mut mobility = 0;
    let mut advancement = 0.0;

    for from in board.occupied() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        let (moves, captures) = raw_squares(board, from);
        let worth = piece.kind.worth();
        for to in captures {
            let slot = &mut cheapest_attacker[to as usize];
            *slot = Some(slot.map_or(worth, |w| w.min(worth)));
        }
        defended |= defended_squares(board, from);

        let sign = match piece.color {
            Color::White => 1,
            Color::Black => -1,
        };
        if !matches!(
            piece.kind,
            PieceKind::Bow | PieceKind::Cannon | PieceKind::Star | PieceKind::King
        ) {
            mobility += sign * moves.len() as i32;
        }
        advancement += sign as f64 * promotion_nearness(piece.kind, piece.color, from);
    }

    let weakness = |sq: u8| -> Option<i32> {
        let worth = board.piece_at(sq)?.kind.worth();
        let cheapest = cheapest_attacker[sq as usize]?;
        if !defended.contains(sq) {
            Some(worth)
        } else if worth > cheapest {
            Some(worth - cheapest)
        } else {
            None
        }
    };

    // The mover's single worst exposure does not count
    let mover_weak: Vec<i32> = board.pieces_of(mover).filter_map(&weakness).collect();
    let mover_total = mover_weak.iter().sum::<i32>() - mover_weak.iter().max().copied().unwrap_or(0);

    let opponent = mover.other();
    let opponent_total: i32 = board.pieces_of(opponent).filter_map(&weakness).sum();
    let latent: i32 = board
        .pieces_of(opponent)
        .filter(|&sq| cheapest_attacker[sq as usize].is_none() && !defended.contains(sq))
        .filter(|&sq| is_advanced(opponent, sq))
        .filter_map(|sq| board.piece_at(sq))
        .map(|pc| pc.kind.worth())
        .sum();

    let sign = match mover {
        Color::White => 1,
        Color::Black => -1,
    };
    Score {
        mate: 0,
        material: board.material(Color::White) - board.material(Color::Black)
            + sign * opponent_total,
        threat: -sign * mover_total,
        hanging: sign * latent,
        advancement,
        mobility,
    }
}

/// Beyond the first two ranks of its own side.
fn is_advanced(color: Color, sq: u8) -> bool {
    match color {
        Color::White => sq as usize >= 2 * BOARD_SIZE,
        Color::Black => (sq as usize) < BOARD_SIZE * (BOARD_SIZE - 2),
    }
}

/// Unsigned closeness of a promotable piece to its promotion squares,
/// 1.0 on the square itself and halving per rank or file away.
fn promotion_nearness(kind: PieceKind, color: Color, sq: u8) -> f64 {
    let (x, y) = to_coords(sq);
    let last = BOARD_SIZE as i32 - 1;
    let half = BOARD_SIZE as i32 / 2;
    let (x, y) = (x as i32, y as i32);
    let distance = match (kind, color) {
        (PieceKind::Pawn | PieceKind::Centurion, Color::White) => last - y,
        (PieceKind::Pawn | PieceKind::Centurion, Color::Black) => y,
        (PieceKind::Buffoon, Color::White) => (half - y).abs(),
        (PieceKind::Buffoon, Color::Black) => (y - (half - 1)).abs(),
        (PieceKind::Ship, _) => (x - 1).abs().min((x - (last - 1)).abs()),
        _ => return 0.0,
    };
    0.5f64.powi(distance)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
