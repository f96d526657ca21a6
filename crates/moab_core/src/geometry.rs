//! Move primitives over the 16×16 grid.
//!
//! Every piece recipe is built from three generators:
//! - `ray`: sliding along directions until blocked (optionally length-limited)
//! - `leap`: the eight symmetric jumps of an (a, b) leaper
//! - `screen`: artillery rays that capture only after hopping one obstacle
//!
//! Each generator returns `(moves, captures)`: empty destinations and squares
//! holding a piece of the other side.

use crate::squareset::SquareSet;
use crate::types::{BOARD_SIZE, Color, NUM_SQUARES, Piece, Square, sq, to_coords};

/// A ray direction: the index step and the file on which the ray must stop
/// before stepping again (so it never wraps around the board edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub step: i16,
    pub forbidden_file: Option<u8>,
}

const N: i16 = BOARD_SIZE as i16;
const LAST_FILE: u8 = BOARD_SIZE as u8 - 1;

pub const NORTH: Direction = Direction { step: N, forbidden_file: None };
pub const SOUTH: Direction = Direction { step: -N, forbidden_file: None };
pub const EAST: Direction = Direction { step: 1, forbidden_file: Some(LAST_FILE) };
pub const WEST: Direction = Direction { step: -1, forbidden_file: Some(0) };
pub const NORTH_EAST: Direction = Direction { step: N + 1, forbidden_file: Some(LAST_FILE) };
pub const NORTH_WEST: Direction = Direction { step: N - 1, forbidden_file: Some(0) };
pub const SOUTH_EAST: Direction = Direction { step: -N + 1, forbidden_file: Some(LAST_FILE) };
pub const SOUTH_WEST: Direction = Direction { step: -N - 1, forbidden_file: Some(0) };

pub const ROOK_DIRS: [Direction; 4] = [NORTH, SOUTH, EAST, WEST];
pub const BISHOP_DIRS: [Direction; 4] = [NORTH_WEST, SOUTH_WEST, NORTH_EAST, SOUTH_EAST];
pub const QUEEN_DIRS: [Direction; 8] = [
    NORTH, SOUTH, EAST, WEST, NORTH_WEST, SOUTH_WEST, NORTH_EAST, SOUTH_EAST,
];

/// Squares a piece can reach, split into quiet moves and captures.
pub type Reach = (SquareSet, SquareSet);

/// Slide from `origin` along each direction. `max_length` of None means
/// unbounded. The origin square itself is never inspected, so rays may start
/// from a neighbouring square of the moving piece.
pub fn ray(
    squares: &[Option<Piece>; NUM_SQUARES],
    side: Color,
    origin: Square,
    directions: &[Direction],
    max_length: Option<u8>,
) -> Reach {
    let mut moves = SquareSet::EMPTY;
    let mut captures = SquareSet::EMPTY;
    for dir in directions {
        let mut cur = origin as i16;
        let mut length = 0u8;
        while dir.forbidden_file != Some((cur % N) as u8) && max_length != Some(length) {
            cur += dir.step;
            length += 1;
            if !(0..NUM_SQUARES as i16).contains(&cur) {
                break;
            }
            match squares[cur as usize] {
                None => {
                    moves.insert(cur as Square);
                    continue;
                }
                Some(pc) if pc.color != side => captures.insert(cur as Square),
                Some(_) => {}
            }
            break;
        }
    }
    (moves, captures)
}

/// The (±a, ±b) and (±b, ±a) jumps from `origin`. Off-board targets are skipped
/// and duplicate offsets (a = b, or b = 0) collapse.
pub fn leap(
    squares: &[Option<Piece>; NUM_SQUARES],
    side: Color,
    origin: Square,
    (a, b): (i8, i8),
) -> Reach {
    let mut moves = SquareSet::EMPTY;
    let mut captures = SquareSet::EMPTY;
    let (ox, oy) = to_coords(origin);
    for d1 in [a, -a] {
        for d2 in [b, -b] {
            for (x, y) in [(ox + d1, oy + d2), (ox + d2, oy + d1)] {
                let Some(to) = sq(x, y) else { continue };
                match squares[to as usize] {
                    None => moves.insert(to),
                    Some(pc) if pc.color != side => captures.insert(to),
                    Some(_) => {}
                }
            }
        }
    }
    (moves, captures)
}

/// Artillery movement: quiet moves until the first obstacle, then a capture
/// of the next occupied square if it holds an enemy. A second obstacle of
/// either side ends the direction.
pub fn screen(
    squares: &[Option<Piece>; NUM_SQUARES],
    side: Color,
    origin: Square,
    directions: &[Direction],
) -> Reach {
    let mut moves = SquareSet::EMPTY;
    let mut captures = SquareSet::EMPTY;
    for dir in directions {
        let mut cur = origin as i16;
        let mut obstacles = 0u8;
        while dir.forbidden_file != Some((cur % N) as u8) && obstacles < 2 {
            cur += dir.step;
            if !(0..NUM_SQUARES as i16).contains(&cur) {
                break;
            }
            match squares[cur as usize] {
                None if obstacles == 0 => moves.insert(cur as Square),
                None => {}
                Some(pc) => {
                    if pc.color != side && obstacles == 1 {
                        captures.insert(cur as Square);
                    }
                    obstacles += 1;
                }
            }
        }
    }
    (moves, captures)
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
