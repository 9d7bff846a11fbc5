use gridroute_core::Board;

use crate::Pathfinder;
use crate::pathfinder::finish;
use crate::report::{Outcome, SearchReport};
use crate::state::{SearchState, UNREACHABLE};

impl Pathfinder {
    /// Bellman-Ford with negative-cycle detection.
    ///
    /// Runs up to `N − 1` row-major relaxation passes over every
    /// non-wall cell already assigned a distance, relaxing each edge
    /// to a non-wall neighbor; a pass with zero relaxations ends the
    /// loop early. The trace starts with the start cell and then
    /// records, per pass, the cells that pass newly relaxed (in
    /// first-relaxation order), so a cell relaxed in several passes
    /// appears several times.
    ///
    /// A final pass runs purely as a detector: any edge still
    /// relaxable identifies a destination reachable from a negative
    /// cycle. When that set is non-empty the run ends in
    /// [`Outcome::NegativeCycle`] with those destinations (the
    /// touched frontier, not the full cycle) and no path is
    /// reconstructed.
    pub fn bellman_ford(&mut self, board: &Board) -> SearchReport {
        let len = board.len();
        let mut state = SearchState::new(len);
        let mut visited_order = vec![board.start()];
        state.distance[board.start_idx()] = 0;

        // Per-pass membership scratch, cleared as each pass drains.
        let mut in_pass = vec![false; len];

        for _ in 1..len {
            let mut relaxed: Vec<usize> = Vec::new();
            for ci in 0..len {
                if state.distance[ci] == UNREACHABLE {
                    continue;
                }
                let cp = board.point(ci);
                if board.is_wall(cp) {
                    continue;
                }
                let current_dist = state.distance[ci];
                board.neighbors(cp, &mut self.nbuf);
                for &np in self.nbuf.iter() {
                    if board.is_wall(np) {
                        continue;
                    }
                    let Some(ni) = board.idx(np) else {
                        continue;
                    };
                    let candidate = current_dist.saturating_add(1 + i64::from(board.weight(np)));
                    if candidate < state.distance[ni] {
                        state.distance[ni] = candidate;
                        state.predecessor[ni] = Some(ci);
                        if !in_pass[ni] {
                            in_pass[ni] = true;
                            relaxed.push(ni);
                        }
                    }
                }
            }
            if relaxed.is_empty() {
                // Stabilized before exhausting the pass budget.
                break;
            }
            for &ni in &relaxed {
                in_pass[ni] = false;
                visited_order.push(board.point(ni));
            }
        }

        // Detector pass: anything still relaxable sits downstream of
        // a negative cycle.
        let mut cycle_cells = Vec::new();
        for ci in 0..len {
            if state.distance[ci] == UNREACHABLE {
                continue;
            }
            let cp = board.point(ci);
            if board.is_wall(cp) {
                continue;
            }
            board.neighbors(cp, &mut self.nbuf);
            for &np in self.nbuf.iter() {
                if board.is_wall(np) {
                    continue;
                }
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                let candidate = state.distance[ci].saturating_add(1 + i64::from(board.weight(np)));
                if candidate < state.distance[ni] && !in_pass[ni] {
                    in_pass[ni] = true;
                    cycle_cells.push(np);
                }
            }
        }

        if !cycle_cells.is_empty() {
            return SearchReport {
                visited: visited_order,
                outcome: Outcome::NegativeCycle(cycle_cells),
            };
        }
        finish(board, &state, visited_order)
    }
}
