use crate::movegen::{promotion_options, promotion_squares, raw_squares};
use crate::squareset::SquareSet;
use crate::types::*;

/// Reasons a move or promotion request is rejected. The board is left
/// untouched whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on square {0}")]
    EmptySquare(Square),
    #[error("piece on square {0} belongs to the side not to move")]
    WrongTurn(Square),
    #[error("{0} is not a legal move")]
    IllegalDestination(Move),
    #[error("a promotion on square {0} must be resolved first")]
    PromotionPending(Square),
    #[error("no promotion is pending on square {0}")]
    NoPendingPromotion(Square),
    #[error("{kind} is not a promotion option on square {square}")]
    InvalidPromotion { square: Square, kind: PieceKind },
}

/// Result of a committed move or promotion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Valid,
    Checkmate,
    Stalemate,
    /// The piece reached a promotion square with several options; the turn
    /// has not passed yet. Resolve with [`Board::promote`].
    PendingPromotion(Vec<PieceKind>),
}

/// Prior contents of the squares one move touched, enough to undo it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reversal {
    touched: [(Square, Option<Piece>); 3],
    len: u8,
    en_passant: Option<EnPassant>,
    turn: Color,
    pending_promotion: Option<Square>,
}

impl Reversal {
    fn new(board: &Board, squares: &[Square]) -> Self {
        let mut reversal = Reversal {
            touched: [(0, None); 3],
            len: 0,
            en_passant: board.en_passant,
            turn: board.turn,
            pending_promotion: board.pending_promotion,
        };
        for &sq in squares {
            reversal.memorize(board, sq);
        }
        reversal
    }

    fn memorize(&mut self, board: &Board, sq: Square) {
        self.touched[self.len as usize] = (sq, board.piece_at(sq));
        self.len += 1;
    }

    /// Squares the move touched with their prior occupants.
    pub fn touched(&self) -> &[(Square, Option<Piece>)] {
        &self.touched[..self.len as usize]
    }
}

/// 16×16 board: pieces by square, turn, en passant marker and cached
/// per-side material, plus the reversal log of applied moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    turn: Color,
    en_passant: Option<EnPassant>,
    material: [i32; 2],
    occupied: [SquareSet; 2],
    pending_promotion: Option<Square>,
    history: Vec<Reversal>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Board {
    /// Empty board with `turn` to move.
    pub fn new(turn: Color) -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            turn,
            en_passant: None,
            material: [0; 2],
            occupied: [SquareSet::EMPTY; 2],
            pending_promotion: None,
            history: Vec::new(),
        }
    }

    pub fn squares(&self) -> &[Option<Piece>; NUM_SQUARES] {
        &self.squares
    }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }
    /// Number of moves in the reversal log.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cached material total of `color`.
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.idx()]
    }

    /// Material of `color` summed from the squares, bypassing the cache.
    pub fn recount_material(&self, color: Color) -> i32 {
        self.pieces_of(color)
            .filter_map(|sq| self.piece_at(sq))
            .map(|pc| pc.kind.worth())
            .sum()
    }

    /// Squares occupied by `color`.
    pub fn pieces_of(&self, color: Color) -> SquareSet {
        self.occupied[color.idx()]
    }

    /// Squares occupied by either side.
    pub fn occupied(&self) -> SquareSet {
        self.occupied[0] | self.occupied[1]
    }

    /// Hand the move to `turn`. Position setup only, like the piece
    /// placement calls below; the text format carries no turn. Moves and
    /// promotions pass the turn themselves.
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Put a piece on `sq`, replacing whatever stood there.
    pub fn place_piece(&mut self, sq: Square, piece: Piece) {
        self.remove_piece(sq);
        self.squares[sq as usize] = Some(piece);
        self.material[piece.color.idx()] += piece.kind.worth();
        self.occupied[piece.color.idx()].insert(sq);
    }

    /// Empty `sq`, returning what stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq as usize].take()?;
        self.material[piece.color.idx()] -= piece.kind.worth();
        self.occupied[piece.color.idx()].remove(sq);
        Some(piece)
    }

    /// Replace the kind of the piece on `sq`, keeping material exact.
    pub fn change_kind(&mut self, sq: Square, kind: PieceKind) {
        if let Some(pc) = self.piece_at(sq) {
            self.place_piece(sq, Piece::new(pc.color, kind));
        }
    }

    // =========================================================================
    // Search-mode mutation: unvalidated apply with exact undo
    // =========================================================================

    /// Apply a move without validating it and push its reversal record.
    /// On a promotion square the piece becomes the `promotion_choice`-th
    /// option (the first option if the index is out of range).
    pub fn make_move(&mut self, from: Square, to: Square, promotion_choice: usize) {
        let (reversal, promotion) = self.apply(from, to);
        if let Some(options) = promotion {
            let kind = options.get(promotion_choice).unwrap_or(&options[0]);
            self.change_kind(to, *kind);
        }
        self.turn = self.turn.other();
        self.history.push(reversal);
    }

    /// Revert the most recent move exactly.
    ///
    /// # Panics
    /// If no move has been recorded.
    pub fn unmake_move(&mut self) {
        let reversal = self
            .history
            .pop()
            .expect("unmake_move called with an empty reversal log");
        for &(sq, prior) in reversal.touched() {
            match prior {
                Some(pc) => self.place_piece(sq, pc),
                None => {
                    self.remove_piece(sq);
                }
            }
        }
        self.en_passant = reversal.en_passant;
        self.turn = reversal.turn;
        self.pending_promotion = reversal.pending_promotion;
    }

    /// Revert every recorded move.
    pub fn unmake_all(&mut self) {
        while !self.history.is_empty() {
            self.unmake_move();
        }
    }

    /// Relocate the mover (and take en passant), update the marker, and
    /// report the promotion options if the destination promotes. Turn and
    /// kind are left to the caller.
    fn apply(&mut self, from: Square, to: Square) -> (Reversal, Option<&'static [PieceKind]>) {
        let mut reversal = Reversal::new(self, &[from, to]);
        let Some(piece) = self.piece_at(from) else {
            return (reversal, None);
        };

        if let Some(ep) = self.en_passant
            && ep.landing == to
            && piece.kind.is_pawn_like()
        {
            reversal.memorize(self, ep.victim);
            self.remove_piece(ep.victim);
        }

        self.remove_piece(from);
        self.place_piece(to, piece);

        let double_step = (from as i16 - to as i16).unsigned_abs() as usize == 2 * BOARD_SIZE;
        self.en_passant = if piece.kind.is_pawn_like() && double_step {
            Some(EnPassant {
                landing: ((from as u16 + to as u16) / 2) as Square,
                victim: to,
            })
        } else {
            None
        };

        let promotion = promotion_squares(piece.kind, piece.color)
            .contains(to)
            .then(|| promotion_options(piece.kind))
            .filter(|options| !options.is_empty());
        (reversal, promotion)
    }

    // =========================================================================
    // Interactive mode: validated moves with suspended promotion choice
    // =========================================================================

    /// Play a move for the side to move after checking it is legal.
    ///
    /// When the mover reaches a promotion square with several options and
    /// `promotion_choice` is None, the move is applied but the turn does not
    /// pass: the options are returned and [`Board::promote`] must follow.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion_choice: Option<usize>,
    ) -> Result<MoveOutcome, MoveError> {
        if let Some(pending) = self.pending_promotion {
            return Err(MoveError::PromotionPending(pending));
        }
        let piece = self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn(from));
        }
        let (moves, captures) = self.legal_squares(from, true);
        if !(moves | captures).contains(to) {
            return Err(MoveError::IllegalDestination(Move::new(from, to)));
        }

        let (reversal, promotion) = self.apply(from, to);
        self.history.push(reversal);
        if let Some(options) = promotion {
            match (options.len(), promotion_choice) {
                (1, _) => self.change_kind(to, options[0]),
                (_, Some(choice)) if choice < options.len() => {
                    self.change_kind(to, options[choice])
                }
                _ => {
                    self.pending_promotion = Some(to);
                    return Ok(MoveOutcome::PendingPromotion(options.to_vec()));
                }
            }
        }
        self.turn = self.turn.other();
        Ok(self.outcome())
    }

    /// Resolve a pending promotion on `square` to `kind` and pass the turn.
    pub fn promote(&mut self, square: Square, kind: PieceKind) -> Result<MoveOutcome, MoveError> {
        if self.pending_promotion != Some(square) {
            return Err(MoveError::NoPendingPromotion(square));
        }
        let options = self
            .piece_at(square)
            .map(|pc| promotion_options(pc.kind))
            .unwrap_or_default();
        if !options.contains(&kind) {
            return Err(MoveError::InvalidPromotion { square, kind });
        }
        self.change_kind(square, kind);
        self.pending_promotion = None;
        self.turn = self.turn.other();
        Ok(self.outcome())
    }

    fn outcome(&mut self) -> MoveOutcome {
        match self.checkmate_status(self.turn) {
            CheckmateStatus::None => MoveOutcome::Valid,
            CheckmateStatus::Stalemate => MoveOutcome::Stalemate,
            CheckmateStatus::Checkmate => MoveOutcome::Checkmate,
        }
    }

    // =========================================================================
    // Check detection
    // =========================================================================

    /// True if any piece of the other side has a raw capture onto a king of
    /// `color`. The en passant landing square never holds a king and is
    /// skipped.
    pub fn in_check(&self, color: Color) -> bool {
        let landing = self.en_passant.map(|ep| ep.landing);
        self.pieces_of(color.other()).any(|from| {
            let (_, captures) = raw_squares(self, from);
            captures.filter(|&to| Some(to) != landing).any(|to| {
                self.piece_at(to)
                    .is_some_and(|pc| pc.kind == PieceKind::King)
            })
        })
    }

    /// True if moving `from` → `to` would leave the mover in check. The move
    /// is tried on this board and reverted through the reversal log.
    pub fn would_expose_check(&mut self, from: Square, to: Square) -> bool {
        let Some(mover) = self.piece_at(from) else {
            return false;
        };
        self.make_move(from, to, 0);
        let exposed = self.in_check(mover.color);
        self.unmake_move();
        exposed
    }

    /// Whether `color` has any legal move, and if not, whether it is mated.
    pub fn checkmate_status(&mut self, color: Color) -> CheckmateStatus {
        for from in self.pieces_of(color) {
            let (moves, captures) = self.legal_squares(from, true);
            if !moves.is_empty() || !captures.is_empty() {
                return CheckmateStatus::None;
            }
        }
        if self.in_check(color) {
            CheckmateStatus::Checkmate
        } else {
            CheckmateStatus::Stalemate
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
