use heuristic_engine::{HeuristicConfig, HeuristicEngine};
use moab_core::{Board, Engine, PieceKind};

const DUEL: &str = "KING 7\nROOK 34\nCENTURION 20\n\nKING 247\nQUEEN 194\nPAWN 230\n";

fn seeded(seed: u64) -> HeuristicEngine {
    HeuristicEngine::new(HeuristicConfig {
        seed: Some(seed),
        depth: 1,
        ..HeuristicConfig::default()
    })
}

#[test]
fn test_search_returns_a_legal_move_and_keeps_the_board() {
    let board = Board::from_position_str(DUEL).unwrap();
    let before = board.clone();
    let mut engine = seeded(3);

    let result = engine.search(&board);
    let mv = result.best_move.expect("side 1 has legal moves");
    let mut probe = board.clone();
    assert!(probe.legal_moves().contains(&mv));
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, probe.legal_moves().len() as u64);
    assert_eq!(board, before);
}

#[test]
fn test_seeded_engines_agree() {
    let board = Board::from_position_str(DUEL).unwrap();
    let a = seeded(42).search(&board).best_move;
    let b = seeded(42).search(&board).best_move;
    assert_eq!(a, b);
}

#[test]
fn test_parallel_engine_picks_from_the_same_moves() {
    let board = Board::from_position_str(DUEL).unwrap();
    let mut engine = HeuristicEngine::new(HeuristicConfig {
        parallel: true,
        seed: Some(9),
        ..HeuristicConfig::default()
    });
    let mv = engine.search(&board).best_move.unwrap();
    assert!(board.clone().legal_moves().contains(&mv));
}

#[test]
fn test_choose_promotion_uses_options() {
    let board = Board::from_position_str("KING 0\nCENTURION 242\n\nKING 255\n").unwrap();
    let mut engine = seeded(1);
    let options = [PieceKind::Lion, PieceKind::Gryphon, PieceKind::Queen];
    assert_eq!(engine.choose_promotion(&board, 242, &options), PieceKind::Queen);
    assert_eq!(engine.choose_promotion(&board, 242, &[]), PieceKind::Queen);
}
