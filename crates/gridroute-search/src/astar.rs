use gridroute_core::Board;

use crate::Pathfinder;
use crate::distance::manhattan;
use crate::heap::MinHeap;
use crate::pathfinder::finish;
use crate::report::SearchReport;
use crate::state::SearchState;

impl Pathfinder {
    /// A* search: Dijkstra's structure with the heap keyed on
    /// `f = g + h`, where `h` is the Manhattan distance to the end.
    ///
    /// `g` (the `distance` array) still drives relaxation; `h_cost`
    /// and `f_cost` are recomputed for every improved neighbor. The
    /// heuristic is admissible only while all edge costs are
    /// non-negative; the same lazy-deletion and negative-weight
    /// caveats as [`dijkstra`](Self::dijkstra) apply.
    pub fn astar(&mut self, board: &Board) -> SearchReport {
        let mut state = SearchState::new(board.len());
        let mut visited_order = Vec::new();
        let start = board.start();
        let end = board.end();
        let start_idx = board.start_idx();
        let end_idx = board.end_idx();

        state.distance[start_idx] = 0;
        state.h_cost[start_idx] = i64::from(manhattan(start, end));
        state.f_cost[start_idx] = state.h_cost[start_idx];

        let mut frontier = MinHeap::new();
        frontier.enqueue(start_idx, state.f_cost[start_idx]);

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

            let current_g = state.distance[ci];
            board.neighbors(cp, &mut self.nbuf);
            for &np in self.nbuf.iter() {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if state.visited[ni] {
                    continue;
                }
                let g = current_g.saturating_add(1 + i64::from(board.weight(np)));
                if g < state.distance[ni] {
                    state.predecessor[ni] = Some(ci);
                    state.distance[ni] = g;
                    state.h_cost[ni] = i64::from(manhattan(np, end));
                    state.f_cost[ni] = g.saturating_add(state.h_cost[ni]);
                    frontier.enqueue(ni, state.f_cost[ni]);
                }
            }
        }

        finish(board, &state, visited_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use gridroute_core::{Point, WEIGHT_HEAVY, WEIGHT_LIGHT};

    #[test]
    fn finds_an_optimal_path_on_uniform_cost() {
        let mut board = Board::new(5, 5);
        board.set_end(Point::new(4, 4)).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.astar(&board);
        assert_eq!(report.path_len(), 9);
    }

    #[test]
    fn heuristic_focuses_the_expansion() {
        // On an open grid the goal-directed search expands no more
        // cells than Dijkstra does.
        let mut board = Board::new(7, 7);
        board.set_start(Point::new(3, 3)).unwrap();
        board.set_end(Point::new(6, 3)).unwrap();
        let mut pf = Pathfinder::new();
        let astar = pf.run(&board, Algorithm::Astar);
        let dijkstra = pf.run(&board, Algorithm::Dijkstra);
        assert!(astar.visited_count() <= dijkstra.visited_count());
        assert_eq!(astar.path_len(), dijkstra.path_len());
    }

    #[test]
    fn matches_dijkstra_cost_with_weights() {
        let mut board = Board::new(4, 4);
        board.set_end(Point::new(3, 3)).unwrap();
        board.set_weight(Point::new(1, 0), WEIGHT_HEAVY).unwrap();
        board.set_weight(Point::new(1, 1), WEIGHT_LIGHT).unwrap();
        board.set_weight(Point::new(2, 2), WEIGHT_LIGHT).unwrap();
        let cost = |path: &[Point]| -> i32 {
            path[1..].iter().map(|&p| 1 + board.weight(p)).sum()
        };
        let mut pf = Pathfinder::new();
        let astar = pf.astar(&board);
        let dijkstra = pf.dijkstra(&board);
        assert_eq!(
            cost(astar.path().unwrap()),
            cost(dijkstra.path().unwrap()),
        );
    }

    #[test]
    fn extreme_negative_weights_do_not_overflow() {
        // g-costs blow through the i32 range when weights sit at
        // i32::MIN; the run must still complete with a route.
        let mut board = Board::new(4, 1);
        board.set_end(Point::new(3, 0)).unwrap();
        board.set_weight(Point::new(1, 0), i32::MIN).unwrap();
        board.set_weight(Point::new(2, 0), i32::MIN).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.astar(&board);
        assert_eq!(report.path_len(), 4);
    }

    #[test]
    fn walled_end_reports_no_path() {
        let mut board = Board::new(3, 3);
        board.set_end(Point::new(2, 2)).unwrap();
        board.set_wall(Point::new(1, 2), true).unwrap();
        board.set_wall(Point::new(2, 1), true).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.astar(&board);
        assert_eq!(report.path(), None);
    }
}
