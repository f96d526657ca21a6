//! Piece movement recipes and move generation.
//!
//! Every kind is a static list of [`Component`]s evaluated by one loop, so a
//! new kind is a table entry rather than new branch logic. Raw generation
//! ignores check; [`Board::legal_squares`] filters the raw sets through
//! [`Board::would_expose_check`] when asked to.

use crate::board::Board;
use crate::geometry::{
    BISHOP_DIRS, Direction, EAST, NORTH, NORTH_EAST, NORTH_WEST, QUEEN_DIRS, ROOK_DIRS, Reach,
    SOUTH, SOUTH_EAST, SOUTH_WEST, WEST, leap, ray, screen,
};
use crate::squareset::SquareSet;
use crate::types::*;

/// How a pawn-like kind treats its diagonal steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceRule {
    /// Diagonal steps only capture; en passant only takes another Pawn.
    Pawn,
    /// Empty diagonal steps are quiet moves; en passant takes any advancer.
    Centurion,
}

/// One building block of a piece's movement.
#[derive(Clone, Copy, Debug)]
pub enum Component {
    Ray(&'static [Direction], Option<u8>),
    Leap(i8, i8),
    Screen(&'static [Direction]),
    /// Rays that start from the square at (dx, dy) relative to the piece.
    /// Skipped when that square is off the board.
    Offset(i8, i8, &'static [Direction]),
    Advance(AdvanceRule),
}

use Component::*;

const NS: [Direction; 2] = [NORTH, SOUTH];
const WE: [Direction; 2] = [WEST, EAST];
const WEST_DIAGS: [Direction; 2] = [NORTH_WEST, SOUTH_WEST];
const EAST_DIAGS: [Direction; 2] = [NORTH_EAST, SOUTH_EAST];
const SOUTH_DIAGS: [Direction; 2] = [SOUTH_WEST, SOUTH_EAST];
const NORTH_DIAGS: [Direction; 2] = [NORTH_WEST, NORTH_EAST];

/// Movement recipe for a kind.
pub fn recipe(kind: PieceKind) -> &'static [Component] {
    match kind {
        PieceKind::Pawn => &[Advance(AdvanceRule::Pawn)],
        PieceKind::Centurion => &[Advance(AdvanceRule::Centurion)],
        PieceKind::Knight => &[Leap(2, 1)],
        PieceKind::Bishop => &[Ray(&BISHOP_DIRS, None)],
        PieceKind::Rook => &[Ray(&ROOK_DIRS, None)],
        PieceKind::Queen => &[Ray(&QUEEN_DIRS, None)],
        PieceKind::King | PieceKind::Buffoon => &[Ray(&QUEEN_DIRS, Some(1))],
        PieceKind::Elephant => &[Ray(&BISHOP_DIRS, Some(1)), Leap(2, 2)],
        PieceKind::Machine => &[Ray(&ROOK_DIRS, Some(1)), Leap(2, 0)],
        PieceKind::Camel => &[Leap(3, 1)],
        PieceKind::Bull => &[Leap(3, 2)],
        PieceKind::Dragonwoman => &[Ray(&ROOK_DIRS, None), Leap(2, 1)],
        PieceKind::Diablo => &[Ray(&BISHOP_DIRS, None), Leap(2, 1)],
        PieceKind::Unicorn => &[Ray(&QUEEN_DIRS, None), Leap(2, 1)],
        PieceKind::Antelope => &[Leap(2, 2), Leap(3, 3), Leap(2, 0), Leap(3, 0)],
        PieceKind::Buffalo => &[Leap(2, 1), Leap(3, 1), Leap(3, 2)],
        PieceKind::Lion => &[Ray(&QUEEN_DIRS, Some(1)), Leap(2, 0), Leap(2, 1), Leap(2, 2)],
        PieceKind::Ship => &[Offset(-1, 0, &NS), Offset(1, 0, &NS)],
        PieceKind::Rhinoceros => &[
            Offset(-1, 0, &WEST_DIAGS),
            Offset(1, 0, &EAST_DIAGS),
            Offset(0, -1, &SOUTH_DIAGS),
            Offset(0, 1, &NORTH_DIAGS),
        ],
        PieceKind::Gryphon => &[
            Offset(-1, 0, &NS),
            Offset(1, 0, &NS),
            Offset(0, -1, &WE),
            Offset(0, 1, &WE),
        ],
        PieceKind::Cannon => &[Screen(&ROOK_DIRS)],
        PieceKind::Bow => &[Screen(&BISHOP_DIRS)],
        PieceKind::Star => &[Screen(&QUEEN_DIRS)],
    }
}

/// Squares that promote `kind` when reached by `color`.
pub fn promotion_squares(kind: PieceKind, color: Color) -> SquareSet {
    let last = BOARD_SIZE - 1;
    let half = BOARD_SIZE / 2;
    match (kind, color) {
        (PieceKind::Pawn | PieceKind::Centurion, Color::White) => SquareSet::rank(last),
        (PieceKind::Pawn | PieceKind::Centurion, Color::Black) => SquareSet::rank(0),
        (PieceKind::Buffoon, Color::White) => SquareSet::rank(half),
        (PieceKind::Buffoon, Color::Black) => SquareSet::rank(half - 1),
        (PieceKind::Ship, Color::White) => {
            [(NUM_SQUARES - BOARD_SIZE) as Square, (NUM_SQUARES - 1) as Square]
                .into_iter()
                .collect()
        }
        (PieceKind::Ship, Color::Black) => [0, last as Square].into_iter().collect(),
        _ => SquareSet::EMPTY,
    }
}

/// Kinds `kind` may promote to, in choice-index order.
pub fn promotion_options(kind: PieceKind) -> &'static [PieceKind] {
    match kind {
        PieceKind::Pawn => &[PieceKind::Unicorn],
        PieceKind::Centurion => &[PieceKind::Lion, PieceKind::Gryphon, PieceKind::Queen],
        PieceKind::Buffoon => &[PieceKind::Queen],
        PieceKind::Ship => &[PieceKind::Gryphon],
        _ => &[],
    }
}

/// Forward direction and diagonal capture directions for a pawn-like piece.
fn advance_dirs(color: Color) -> (Direction, [Direction; 2]) {
    match color {
        Color::White => (NORTH, [NORTH_EAST, NORTH_WEST]),
        Color::Black => (SOUTH, [SOUTH_EAST, SOUTH_WEST]),
    }
}

fn advance(board: &Board, origin: Square, color: Color, rule: AdvanceRule) -> Reach {
    let squares = board.squares();
    let (forward, diagonals) = advance_dirs(color);
    let (mut moves, _) = ray(squares, color, origin, &[forward], Some(2));
    let (empty_diagonals, mut captures) = ray(squares, color, origin, &diagonals, Some(1));

    for to in empty_diagonals {
        let en_passant = board.en_passant().filter(|ep| ep.landing == to).and_then(|ep| {
            board
                .piece_at(ep.victim)
                .filter(|victim| victim.color != color)
                .filter(|victim| rule == AdvanceRule::Centurion || victim.kind == PieceKind::Pawn)
        });
        if en_passant.is_some() {
            captures.insert(to);
        } else if rule == AdvanceRule::Centurion && board.en_passant().map(|ep| ep.landing) != Some(to)
        {
            moves.insert(to);
        }
    }
    (moves, captures)
}

fn offset_origin(origin: Square, dx: i8, dy: i8) -> Option<Square> {
    let (x, y) = to_coords(origin);
    sq(x + dx, y + dy)
}

/// Raw moves and captures for the piece on `origin`, ignoring check.
/// Returns empty sets for an empty square.
pub fn raw_squares(board: &Board, origin: Square) -> Reach {
    let Some(piece) = board.piece_at(origin) else {
        return (SquareSet::EMPTY, SquareSet::EMPTY);
    };
    let squares = board.squares();
    let color = piece.color;

    let mut moves = SquareSet::EMPTY;
    let mut captures = SquareSet::EMPTY;
    for component in recipe(piece.kind) {
        let (m, c) = match *component {
            Ray(dirs, limit) => ray(squares, color, origin, dirs, limit),
            Leap(a, b) => leap(squares, color, origin, (a, b)),
            Screen(dirs) => screen(squares, color, origin, dirs),
            Offset(dx, dy, dirs) => match offset_origin(origin, dx, dy) {
                Some(start) => ray(squares, color, start, dirs, None),
                None => continue,
            },
            Advance(rule) => advance(board, origin, color, rule),
        };
        moves |= m;
        captures |= c;
    }
    (moves, captures)
}

/// Squares holding friendly pieces that the piece on `origin` could
/// recapture on: its capture pattern with ownership flipped. Pawn-like
/// pieces only count their diagonal steps, never en passant.
pub fn defended_squares(board: &Board, origin: Square) -> SquareSet {
    let Some(piece) = board.piece_at(origin) else {
        return SquareSet::EMPTY;
    };
    let squares = board.squares();
    let flipped = piece.color.other();

    let mut defended = SquareSet::EMPTY;
    for component in recipe(piece.kind) {
        defended |= match *component {
            Ray(dirs, limit) => ray(squares, flipped, origin, dirs, limit).1,
            Leap(a, b) => leap(squares, flipped, origin, (a, b)).1,
            Screen(dirs) => screen(squares, flipped, origin, dirs).1,
            Offset(dx, dy, dirs) => match offset_origin(origin, dx, dy) {
                Some(start) => ray(squares, flipped, start, dirs, None).1,
                None => continue,
            },
            Advance(_) => {
                let (_, diagonals) = advance_dirs(piece.color);
                ray(squares, flipped, origin, &diagonals, Some(1)).1
            }
        };
    }
    defended
}

impl Board {
    /// Moves and captures of the piece on `origin`. With `validate_check`,
    /// destinations that would leave the mover in check are removed.
    pub fn legal_squares(&mut self, origin: Square, validate_check: bool) -> Reach {
        let (moves, captures) = raw_squares(self, origin);
        if !validate_check {
            return (moves, captures);
        }
        let moves = moves.filter(|&to| !self.would_expose_check(origin, to)).collect();
        let captures = captures.filter(|&to| !self.would_expose_check(origin, to)).collect();
        (moves, captures)
    }

    /// Every legal (from, to) pair for the side to move, quiet moves of a
    /// piece before its captures, pieces in ascending square order.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    /// Generate all legal moves into the provided buffer, reusing it across calls.
    pub fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        out.clear();
        for from in self.pieces_of(self.turn()) {
            let (moves, captures) = self.legal_squares(from, true);
            out.extend(moves.map(|to| Move::new(from, to)));
            out.extend(captures.map(|to| Move::new(from, to)));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
