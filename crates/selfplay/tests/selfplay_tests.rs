use heuristic_engine::{HeuristicConfig, HeuristicEngine};
use moab_core::{Board, Color};
use selfplay::{GameConfig, GameResult, GameRunner};

const SKIRMISH: &str = include_str!("../../../positions/skirmish.pos");
const ENGINE_TOML: &str = include_str!("../../../engine.toml");

fn engine(seed: u64) -> HeuristicEngine {
    let mut config = HeuristicConfig::from_toml_str(ENGINE_TOML).unwrap();
    config.seed = Some(seed);
    HeuristicEngine::new(config)
}

#[test]
fn test_sample_files_load() {
    let board = Board::from_position_str(SKIRMISH).unwrap();
    assert_eq!(board.pieces_of(Color::White).len(), 24);
    assert_eq!(board.pieces_of(Color::Black).len(), 24);
    assert_eq!(board.material(Color::White), board.material(Color::Black));
    assert_eq!(Board::from_position_str(&board.to_position_string()).unwrap(), board);

    let config = HeuristicConfig::from_toml_str(ENGINE_TOML).unwrap();
    assert_eq!(config.depth, 1);
    assert_eq!(config.seed, None);
}

#[test]
fn test_short_skirmish_keeps_board_consistent() {
    let mut board = Board::from_position_str(SKIRMISH).unwrap();
    let runner = GameRunner::new(GameConfig { max_moves: 8 });
    let record = runner
        .play_game(&mut board, &mut engine(7), &mut engine(8))
        .unwrap();

    assert!(record.moves.len() <= 8);
    if record.result == GameResult::MoveLimit {
        assert_eq!(record.moves.len(), 8);
    }
    for color in [Color::White, Color::Black] {
        assert_eq!(board.material(color), board.recount_material(color));
    }
    assert_eq!(record.start_position, SKIRMISH);
    assert_eq!(record.final_position, board.to_position_string());

    // Undoing the whole game returns to the start
    board.unmake_all();
    assert_eq!(board, Board::from_position_str(SKIRMISH).unwrap());
}

#[test]
fn test_same_seeds_replay_the_same_game() {
    let runner = GameRunner::new(GameConfig { max_moves: 6 });
    let mut first = Board::from_position_str(SKIRMISH).unwrap();
    let mut second = first.clone();
    let a = runner.play_game(&mut first, &mut engine(3), &mut engine(4)).unwrap();
    let b = runner.play_game(&mut second, &mut engine(3), &mut engine(4)).unwrap();
    assert_eq!(a, b);
}
