//! One-ply move and promotion selection

use moab_core::{Board, Color, Move, PieceKind, Square};
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::HeuristicConfig;
use crate::eval::{evaluate, Score};

/// Result from [`best_move`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Chosen move and its score (None if no legal moves)
    pub best_move: Option<(Move, Score)>,
    /// Number of positions evaluated
    pub nodes: u64,
}

/// Pick a move for the side to move.
///
/// Every legal move is applied with the first promotion option, evaluated
/// and undone. The highest ranked score wins for White and the lowest for
/// Black; among moves whose full score equals the first extremal score
/// exactly, one is drawn from `rng`. The board is unchanged afterwards.
pub fn best_move<R: Rng + ?Sized>(
    board: &mut Board,
    config: &HeuristicConfig,
    rng: &mut R,
) -> SearchOutcome {
    let moves = board.legal_moves();
    let scored = if config.parallel {
        score_parallel(board, &moves)
    } else {
        score_serial(board, &moves)
    };
    let nodes = scored.len() as u64;

    let Some(extremal) = extremal_index(&scored, board.turn(), config) else {
        return SearchOutcome {
            best_move: None,
            nodes,
        };
    };
    let target = scored[extremal].1;
    let ties: Vec<(Move, Score)> = scored.iter().copied().filter(|(_, s)| *s == target).collect();
    let chosen = ties.choose(rng).copied();

    if let Some((mv, score)) = chosen {
        info!(
            side = board.turn().number(),
            candidates = scored.len(),
            ties = ties.len(),
            "decided on {mv}: {score:?}"
        );
    }
    SearchOutcome {
        best_move: chosen,
        nodes,
    }
}

fn score_serial(board: &mut Board, moves: &[Move]) -> Vec<(Move, Score)> {
    moves
        .iter()
        .map(|&mv| {
            board.make_move(mv.from, mv.to, 0);
            let score = evaluate(board);
            board.unmake_move();
            debug!("{mv}: {score:?}");
            (mv, score)
        })
        .collect()
}

/// Each rayon worker scores on its own copy; results keep move order.
fn score_parallel(board: &Board, moves: &[Move]) -> Vec<(Move, Score)> {
    moves
        .par_iter()
        .map_init(
            || board.clone(),
            |local, &mv| {
                local.make_move(mv.from, mv.to, 0);
                let score = evaluate(local);
                local.unmake_move();
                debug!("{mv}: {score:?}");
                (mv, score)
            },
        )
        .collect()
}

/// Index of the first candidate with the best rank for `side`.
fn extremal_index<T>(
    scored: &[(T, Score)],
    side: Color,
    config: &HeuristicConfig,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, (_, score)) in scored.iter().enumerate() {
        let rank = score.rank(config);
        let better = match best {
            None => true,
            Some(b) => {
                let best_rank = scored[b].1.rank(config);
                match side {
                    Color::White => rank > best_rank,
                    Color::Black => rank < best_rank,
                }
            }
        };
        if better {
            best = Some(i);
        }
    }
    best
}

/// Pick the promotion kind for the piece on `square`.
///
/// Each candidate is swapped in, evaluated once and swapped back; the best
/// ranked for the promoting side wins, first candidate on ties. Falls back
/// to Queen when there is nothing to choose from.
pub fn best_promotion(
    board: &mut Board,
    square: Square,
    candidates: &[PieceKind],
    config: &HeuristicConfig,
) -> PieceKind {
    let Some(piece) = board.piece_at(square) else {
        return PieceKind::Queen;
    };

    let mut scored = Vec::with_capacity(candidates.len());
    for &kind in candidates {
        board.change_kind(square, kind);
        let score = evaluate(board);
        debug!(square, "promotion to {kind}: {score:?}");
        scored.push((kind, score));
    }
    board.change_kind(square, piece.kind);

    let kind = extremal_index(&scored, piece.color, config)
        .map(|i| scored[i].0)
        .unwrap_or(PieceKind::Queen);
    info!(square, "promoting to {kind}");
    kind
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
