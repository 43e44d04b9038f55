use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Counts leaf nodes of the legal move tree down to `depth`.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut buffers: Vec<Vec<Move>> = (0..depth).map(|_| Vec::with_capacity(64)).collect();
    count(pos, &mut buffers)
}

/// One buffer per remaining ply so recursion does not allocate.
fn count(pos: &mut Position, buffers: &mut [Vec<Move>]) -> u64 {
    let Some((moves, deeper)) = buffers.split_first_mut() else {
        return 1;
    };
    legal_moves_into(pos, moves);
    if deeper.is_empty() {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.iter() {
        let undo = pos.make_move(mv);
        nodes += count(pos, deeper);
        pos.unmake_move(mv, undo);
    }
    nodes
}

/// Per-root-move node counts, the usual way to bisect a movegen bug.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = perft(pos, depth - 1);
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}
