use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 16;
/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major square index, `0..NUM_SQUARES`.
pub type Square = u8;

/// Side to move. `White` is side 1 and advances toward increasing ranks,
/// `Black` is side 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// 1 for side 1, 2 for side 2.
    pub fn number(self) -> u8 {
        self.idx() as u8 + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Centurion,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Elephant,
    Camel,
    Dragonwoman,
    Machine,
    Unicorn,
    Diablo,
    Antelope,
    Bull,
    Buffalo,
    Lion,
    Buffoon,
    Ship,
    Rhinoceros,
    Gryphon,
    Cannon,
    Bow,
    Star,
}

impl PieceKind {
    pub const ALL: [PieceKind; 24] = [
        PieceKind::Pawn,
        PieceKind::Centurion,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Elephant,
        PieceKind::Camel,
        PieceKind::Dragonwoman,
        PieceKind::Machine,
        PieceKind::Unicorn,
        PieceKind::Diablo,
        PieceKind::Antelope,
        PieceKind::Bull,
        PieceKind::Buffalo,
        PieceKind::Lion,
        PieceKind::Buffoon,
        PieceKind::Ship,
        PieceKind::Rhinoceros,
        PieceKind::Gryphon,
        PieceKind::Cannon,
        PieceKind::Bow,
        PieceKind::Star,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Material worth used for the per-side totals and the exchange heuristics.
    pub fn worth(self) -> i32 {
        PIECE_WORTHS[self.idx()]
    }

    /// Kinds that advance like pawns and may be taken en passant.
    pub fn is_pawn_like(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Centurion)
    }

    /// Two-letter code for board dumps.
    pub fn abbrev(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pa",
            PieceKind::Centurion => "Ce",
            PieceKind::Knight => "Kn",
            PieceKind::Bishop => "Bi",
            PieceKind::Rook => "Ro",
            PieceKind::Queen => "Qu",
            PieceKind::King => "Ki",
            PieceKind::Elephant => "El",
            PieceKind::Camel => "Cm",
            PieceKind::Dragonwoman => "Dw",
            PieceKind::Machine => "Ma",
            PieceKind::Unicorn => "Un",
            PieceKind::Diablo => "Di",
            PieceKind::Antelope => "An",
            PieceKind::Bull => "Bu",
            PieceKind::Buffalo => "Bf",
            PieceKind::Lion => "Li",
            PieceKind::Buffoon => "Bo",
            PieceKind::Ship => "Sh",
            PieceKind::Rhinoceros => "Rh",
            PieceKind::Gryphon => "Gr",
            PieceKind::Cannon => "Ca",
            PieceKind::Bow => "Bw",
            PieceKind::Star => "St",
        }
    }

    /// Uppercase token used by the position text format.
    pub fn token(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Centurion => "CENTURION",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
            PieceKind::Elephant => "ELEPHANT",
            PieceKind::Camel => "CAMEL",
            PieceKind::Dragonwoman => "DRAGONWOMAN",
            PieceKind::Machine => "MACHINE",
            PieceKind::Unicorn => "UNICORN",
            PieceKind::Diablo => "DIABLO",
            PieceKind::Antelope => "ANTELOPE",
            PieceKind::Bull => "BULL",
            PieceKind::Buffalo => "BUFFALO",
            PieceKind::Lion => "LION",
            PieceKind::Buffoon => "BUFFOON",
            PieceKind::Ship => "SHIP",
            PieceKind::Rhinoceros => "RHINOCEROS",
            PieceKind::Gryphon => "GRYPHON",
            PieceKind::Cannon => "CANNON",
            PieceKind::Bow => "BOW",
            PieceKind::Star => "STAR",
        }
    }
}

/// Indexed by `PieceKind::idx()`.
const PIECE_WORTHS: [i32; 24] = [
    1,  // Pawn
    2,  // Centurion
    3,  // Knight
    3,  // Bishop
    5,  // Rook
    9,  // Queen
    0,  // King
    2,  // Elephant
    3,  // Camel
    8,  // Dragonwoman
    2,  // Machine
    12, // Unicorn
    7,  // Diablo
    4,  // Antelope
    3,  // Bull
    5,  // Buffalo
    6,  // Lion
    2,  // Buffoon
    4,  // Ship
    6,  // Rhinoceros
    7,  // Gryphon
    4,  // Cannon
    3,  // Bow
    6,  // Star
];

/// Error returned when a kind token is not one of the 24 known kinds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for PieceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = to_coords(self.from);
        let (tx, ty) = to_coords(self.to);
        write!(f, "({fx}, {fy}) -> ({tx}, {ty})")
    }
}

/// Pending en passant capture: the square that was skipped over and the
/// square of the piece that double-stepped across it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnPassant {
    pub landing: Square,
    pub victim: Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckmateStatus {
    None,
    Stalemate,
    Checkmate,
}

// Helpers
pub fn file_of(sq: Square) -> i8 {
    (sq as usize % BOARD_SIZE) as i8
}
pub fn rank_of(sq: Square) -> i8 {
    (sq as usize / BOARD_SIZE) as i8
}
pub fn to_coords(sq: Square) -> (i8, i8) {
    (file_of(sq), rank_of(sq))
}
pub fn sq(file: i8, rank: i8) -> Option<Square> {
    let n = BOARD_SIZE as i8;
    if (0..n).contains(&file) && (0..n).contains(&rank) {
        Some((rank as usize * BOARD_SIZE + file as usize) as Square)
    } else {
        None
    }
}
