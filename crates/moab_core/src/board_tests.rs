use super::*;

fn at(x: i8, y: i8) -> Square {
    sq(x, y).unwrap()
}

fn board_with(pieces: &[(Color, PieceKind, Square)]) -> Board {
    let mut board = Board::new(Color::White);
    for &(color, kind, s) in pieces {
        board.place_piece(s, Piece::new(color, kind));
    }
    board
}

fn kings() -> Vec<(Color, PieceKind, Square)> {
    vec![
        (Color::White, PieceKind::King, at(7, 0)),
        (Color::Black, PieceKind::King, at(7, 15)),
    ]
}

#[test]
fn test_place_and_remove_track_material() {
    let mut board = Board::new(Color::White);
    board.place_piece(10, Piece::new(Color::White, PieceKind::Queen));
    board.place_piece(20, Piece::new(Color::Black, PieceKind::Rook));
    assert_eq!(board.material(Color::White), 9);
    assert_eq!(board.material(Color::Black), 5);

    // Replacing a piece removes the old worth first
    board.place_piece(10, Piece::new(Color::Black, PieceKind::Knight));
    assert_eq!(board.material(Color::White), 0);
    assert_eq!(board.material(Color::Black), 8);

    assert_eq!(board.remove_piece(20).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(board.remove_piece(20), None);
    assert_eq!(board.material(Color::Black), 3);
    assert_eq!(board.recount_material(Color::Black), 3);
}

#[test]
fn test_make_unmake_capture_restores_everything() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Rook, at(0, 0)));
    pieces.push((Color::Black, PieceKind::Bishop, at(0, 9)));
    let mut board = board_with(&pieces);
    let before = board.clone();

    board.make_move(at(0, 0), at(0, 9), 0);
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.material(Color::Black), 0);
    assert_eq!(board.piece_at(at(0, 9)).map(|p| p.kind), Some(PieceKind::Rook));

    board.unmake_move();
    assert_eq!(board, before);
}

#[test]
fn test_double_step_sets_marker_and_single_step_clears_it() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Pawn, at(3, 1)));
    pieces.push((Color::Black, PieceKind::Pawn, at(10, 14)));
    let mut board = board_with(&pieces);

    board.make_move(at(3, 1), at(3, 3), 0);
    assert_eq!(
        board.en_passant(),
        Some(EnPassant {
            landing: at(3, 2),
            victim: at(3, 3)
        })
    );
    board.make_move(at(10, 14), at(10, 13), 0);
    assert_eq!(board.en_passant(), None);

    board.unmake_move();
    assert_eq!(board.en_passant().map(|ep| ep.victim), Some(at(3, 3)));
}

#[test]
fn test_en_passant_removes_double_stepped_pawn() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Pawn, at(4, 1)));
    pieces.push((Color::Black, PieceKind::Pawn, at(5, 3)));
    let mut board = board_with(&pieces);

    board.make_move(at(4, 1), at(4, 3), 0);
    let (_, captures) = board.legal_squares(at(5, 3), true);
    assert!(captures.contains(at(4, 2)));

    let before = board.clone();
    board.make_move(at(5, 3), at(4, 2), 0);
    assert_eq!(board.piece_at(at(4, 3)), None);
    assert_eq!(
        board.piece_at(at(4, 2)),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(board.material(Color::White), 0);

    board.unmake_move();
    assert_eq!(board, before);
}

#[test]
fn test_promotion_with_choice_and_undo() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Centurion, at(2, 14)));
    let mut board = board_with(&pieces);
    let before = board.clone();

    board.make_move(at(2, 14), at(2, 15), 1);
    assert_eq!(board.piece_at(at(2, 15)).map(|p| p.kind), Some(PieceKind::Gryphon));
    assert_eq!(board.material(Color::White), PieceKind::Gryphon.worth());

    board.unmake_move();
    assert_eq!(board, before);

    // Out of range choice falls back to the first option
    board.make_move(at(2, 14), at(2, 15), 9);
    assert_eq!(board.piece_at(at(2, 15)).map(|p| p.kind), Some(PieceKind::Lion));
}

#[test]
fn test_play_rejects_invalid_requests_without_mutation() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Knight, at(3, 3)));
    pieces.push((Color::Black, PieceKind::Knight, at(12, 12)));
    let mut board = board_with(&pieces);
    let before = board.clone();

    assert_eq!(board.play(at(0, 5), at(0, 6), None), Err(MoveError::EmptySquare(at(0, 5))));
    assert_eq!(board.play(at(12, 12), at(10, 11), None), Err(MoveError::WrongTurn(at(12, 12))));
    assert_eq!(
        board.play(at(3, 3), at(3, 4), None),
        Err(MoveError::IllegalDestination(Move::new(at(3, 3), at(3, 4))))
    );
    assert_eq!(board, before);

    assert_eq!(board.play(at(3, 3), at(5, 4), None), Ok(MoveOutcome::Valid));
    assert_eq!(board.turn(), Color::Black);
}

#[test]
fn test_set_turn_hands_play_to_side_two() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Knight, at(3, 3)));
    pieces.push((Color::Black, PieceKind::Knight, at(12, 12)));
    let mut board = board_with(&pieces);
    board.set_turn(Color::Black);
    assert_eq!(board.history_len(), 0);

    assert_eq!(board.play(at(3, 3), at(5, 4), None), Err(MoveError::WrongTurn(at(3, 3))));
    assert_eq!(board.play(at(12, 12), at(10, 11), None), Ok(MoveOutcome::Valid));
    assert_eq!(board.turn(), Color::White);

    board.unmake_move();
    assert_eq!(board.turn(), Color::Black);
}

#[test]
fn test_play_suspends_on_multi_option_promotion() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Centurion, at(2, 14)));
    let mut board = board_with(&pieces);

    let outcome = board.play(at(2, 14), at(2, 15), None).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::PendingPromotion(vec![PieceKind::Lion, PieceKind::Gryphon, PieceKind::Queen])
    );
    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.pending_promotion(), Some(at(2, 15)));
    assert_eq!(
        board.play(at(7, 0), at(7, 1), None),
        Err(MoveError::PromotionPending(at(2, 15)))
    );
    assert_eq!(
        board.promote(at(2, 15), PieceKind::Rook),
        Err(MoveError::InvalidPromotion {
            square: at(2, 15),
            kind: PieceKind::Rook
        })
    );
    assert_eq!(board.promote(at(2, 15), PieceKind::Queen), Ok(MoveOutcome::Valid));
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.piece_at(at(2, 15)).map(|p| p.kind), Some(PieceKind::Queen));
    assert_eq!(board.pending_promotion(), None);
}

#[test]
fn test_single_option_promotion_is_automatic() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Pawn, at(0, 14)));
    let mut board = board_with(&pieces);
    assert_eq!(board.play(at(0, 14), at(0, 15), None), Ok(MoveOutcome::Valid));
    assert_eq!(board.piece_at(at(0, 15)).map(|p| p.kind), Some(PieceKind::Unicorn));
}

#[test]
fn test_promote_without_pending_is_rejected() {
    let mut board = board_with(&kings());
    assert_eq!(
        board.promote(at(7, 0), PieceKind::Queen),
        Err(MoveError::NoPendingPromotion(at(7, 0)))
    );
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let mut pieces = kings();
    pieces.push((Color::White, PieceKind::Knight, at(7, 3)));
    pieces.push((Color::Black, PieceKind::Rook, at(7, 10)));
    let mut board = board_with(&pieces);
    let (moves, captures) = board.legal_squares(at(7, 3), true);
    assert!(moves.is_empty() && captures.is_empty());
    let (raw_moves, _) = board.legal_squares(at(7, 3), false);
    assert_eq!(raw_moves.len(), 8);
}

#[test]
fn test_in_check_detects_rook_on_open_file() {
    let mut pieces = kings();
    pieces.push((Color::Black, PieceKind::Rook, at(7, 12)));
    let board = board_with(&pieces);
    assert!(board.in_check(Color::White));
    assert!(!board.in_check(Color::Black));
}

#[test]
#[should_panic(expected = "empty reversal log")]
fn test_unmake_without_history_panics() {
    let mut board = Board::default();
    board.unmake_move();
}
