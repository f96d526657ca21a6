//! Tests for end-of-game detection and the interactive move API
//!
//! - Checkmate against a lone king
//! - Stalemate against a lone king
//! - Takeback through the reversal log

use moab_core::{Board, CheckmateStatus, Color, MoveOutcome, sq};

fn at(x: i8, y: i8) -> u8 {
    sq(x, y).unwrap()
}

// =============================================================================
// Checkmate / Stalemate
// =============================================================================

#[test]
fn test_two_rooks_mate_king_on_home_square() {
    let mut board = Board::from_position_str("KING 7\n\nROOK 0\nROOK 31\nKING 247\n").unwrap();

    assert!(board.in_check(Color::White));
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.checkmate_status(Color::White), CheckmateStatus::Checkmate);
}

#[test]
fn test_cornered_king_without_check_is_stalemate() {
    let text = format!("KING 0\n\nROOK {}\nROOK {}\nKING 247\n", at(1, 15), at(15, 1));
    let mut board = Board::from_position_str(&text).unwrap();

    assert!(!board.in_check(Color::White));
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.checkmate_status(Color::White), CheckmateStatus::Stalemate);
}

#[test]
fn test_play_reports_mate_for_the_side_now_to_move() {
    // One rook drops onto rank 0 while the other holds rank 1
    let text = format!(
        "KING {}\n\nROOK {}\nROOK {}\nKING 247\n",
        at(7, 0),
        at(0, 5),
        at(15, 1)
    );
    let mut board = Board::from_position_str(&text).unwrap();
    board.set_turn(Color::Black);

    let outcome = board.play(at(0, 5), at(0, 0), None).unwrap();
    assert_eq!(outcome, MoveOutcome::Checkmate);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn test_takeback_restores_position() {
    let mut board = Board::from_position_str("KING 7\nCENTURION 20\n\nKING 247\n").unwrap();
    let before = board.clone();

    assert_eq!(board.play(at(4, 1), at(4, 3), None), Ok(MoveOutcome::Valid));
    assert!(board.en_passant().is_some());
    board.unmake_move();
    assert_eq!(board, before);
    assert_eq!(board.history_len(), 0);
}
