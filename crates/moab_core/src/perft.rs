use crate::{board::Board, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
/// Promoting moves follow the first promotion option, as the selector does.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        board.legal_moves_into(buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.make_move(mv.from, mv.to, 0);
            nodes += inner(board, depth - 1, rest);
            board.unmake_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}
