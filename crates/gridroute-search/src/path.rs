//! Back-pointer path reconstruction.

use gridroute_core::{Board, Point};

use crate::state::SearchState;

/// Walk predecessor back-pointers from the board's end cell and
/// return the start-to-end route, or `None` when the end was never
/// reached.
///
/// "Never reached" means the end cell has no predecessor and is not
/// itself the start — a degenerate single-cell walk from an
/// unreached end is not a path.
pub fn reconstruct(board: &Board, state: &SearchState) -> Option<Vec<Point>> {
    let end = board.end();
    let end_idx = board.idx(end)?;
    if state.predecessor[end_idx].is_none() && end != board.start() {
        return None;
    }
    let mut path = Vec::new();
    let mut cur = Some(end_idx);
    while let Some(i) = cur {
        path.push(board.point(i));
        cur = state.predecessor[i];
    }
    path.reverse();
    Some(path)
}
