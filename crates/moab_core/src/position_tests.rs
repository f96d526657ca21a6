use super::*;

const SKIRMISH: &str = "KING 7\nROOK 0\nCENTURION 20\n\nKING 247\nSTAR 200\n";

#[test]
fn test_parse_splits_sides_on_blank_line() {
    let placements = parse_position(SKIRMISH).unwrap();
    assert_eq!(placements.len(), 5);
    assert_eq!(
        placements[2],
        Placement {
            line: 3,
            color: Color::White,
            kind: PieceKind::Centurion,
            square: 20
        }
    );
    assert_eq!(placements[3].color, Color::Black);
    assert_eq!(placements[4].kind, PieceKind::Star);
}

#[test]
fn test_load_sets_material_and_turn() {
    let board = Board::from_position_str(SKIRMISH).unwrap();
    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.material(Color::White), 5 + 2);
    assert_eq!(board.material(Color::Black), 6);
    assert_eq!(board.piece_at(200), Some(Piece::new(Color::Black, PieceKind::Star)));
}

#[test]
fn test_writer_orders_squares_and_always_writes_separator() {
    let board = Board::from_position_str(SKIRMISH).unwrap();
    assert_eq!(
        board.to_position_string(),
        "ROOK 0\nKING 7\nCENTURION 20\n\nSTAR 200\nKING 247\n"
    );

    let mut lone = Board::default();
    lone.place_piece(3, Piece::new(Color::White, PieceKind::King));
    assert_eq!(lone.to_position_string(), "KING 3\n\n");
}

#[test]
fn test_round_trip_reproduces_board() {
    let board = Board::from_position_str(SKIRMISH).unwrap();
    let reloaded = Board::from_position_str(&board.to_position_string()).unwrap();
    assert_eq!(reloaded, board);
}

#[test]
fn test_unknown_kind_is_reported_with_line() {
    let err = Board::from_position_str("KING 7\nWIZARD 9\n").unwrap_err();
    match err {
        PositionError::UnknownKind { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, UnknownKind("WIZARD".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_squares_are_rejected() {
    assert!(matches!(
        Board::from_position_str("KING 256\n"),
        Err(PositionError::SquareOutOfRange { line: 1, value: 256 })
    ));
    assert!(matches!(
        Board::from_position_str("KING -1\n"),
        Err(PositionError::SquareOutOfRange { line: 1, value: -1 })
    ));
    assert!(matches!(
        Board::from_position_str("KING\n"),
        Err(PositionError::Malformed { line: 1, .. })
    ));
    assert!(matches!(
        Board::from_position_str("KING seven\n"),
        Err(PositionError::Malformed { line: 1, .. })
    ));
    assert!(matches!(
        Board::from_position_str("KING 7\n\nQUEEN 7\n"),
        Err(PositionError::OccupiedSquare { line: 3, square: 7 })
    ));
}

#[test]
fn test_failed_load_leaves_board_untouched() {
    let mut board = Board::from_position_str(SKIRMISH).unwrap();
    let before = board.clone();
    assert!(board.load_placements("KING 7\nKING 7\n").is_err());
    assert_eq!(board, before);
}

#[test]
fn test_save_and_load_through_file() {
    let path = std::env::temp_dir().join(format!("moab_position_{}.pos", std::process::id()));
    let board = Board::from_position_str(SKIRMISH).unwrap();
    board.save_position(&path).unwrap();
    let loaded = Board::load_position(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, board);

    assert!(matches!(
        Board::load_position(path.with_extension("missing")),
        Err(PositionError::Io(_))
    ));
}
