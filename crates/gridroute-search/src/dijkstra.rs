use gridroute_core::Board;

use crate::Pathfinder;
use crate::heap::MinHeap;
use crate::pathfinder::finish;
use crate::report::SearchReport;
use crate::state::SearchState;

impl Pathfinder {
    /// Dijkstra's shortest-path search over the weighted grid.
    ///
    /// Improving a neighbor enqueues it again at the new cost; older
    /// entries stay in the heap and are discarded by the visited
    /// check when they eventually surface (lazy deletion). Walls are
    /// not filtered during relaxation, only discarded at dequeue.
    ///
    /// Negative weights are accepted without validation, but then the
    /// result may be sub-optimal and the expansion order is no longer
    /// monotone in cost — callers can screen with
    /// [`Board::has_negative_weights`].
    pub fn dijkstra(&mut self, board: &Board) -> SearchReport {
        let mut state = SearchState::new(board.len());
        let mut visited_order = Vec::new();
        let start_idx = board.start_idx();
        let end_idx = board.end_idx();

        state.distance[start_idx] = 0;
        let mut frontier = MinHeap::new();
        frontier.enqueue(start_idx, 0);

        while let Some(ci) = frontier.dequeue() {
            if state.visited[ci] {
                continue;
            }
            let cp = board.point(ci);
            if board.is_wall(cp) {
                continue;
            }
            state.visited[ci] = true;
            visited_order.push(cp);
            if ci == end_idx {
                break;
            }

            let current_dist = state.distance[ci];
            board.neighbors(cp, &mut self.nbuf);
            for &np in self.nbuf.iter() {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if state.visited[ni] {
                    continue;
                }
                let candidate = current_dist.saturating_add(1 + i64::from(board.weight(np)));
                if candidate < state.distance[ni] {
                    state.distance[ni] = candidate;
                    state.predecessor[ni] = Some(ci);
                    frontier.enqueue(ni, candidate);
                }
            }
        }

        finish(board, &state, visited_order)
    }
}
