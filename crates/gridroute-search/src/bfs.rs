use std::collections::VecDeque;

use gridroute_core::Board;

use crate::Pathfinder;
use crate::pathfinder::finish;
use crate::report::SearchReport;
use crate::state::SearchState;

impl Pathfinder {
    /// Breadth-first search: level-order traversal that treats every
    /// edge as cost 1 and ignores weights entirely.
    ///
    /// Cells are marked visited at enqueue time so nothing is queued
    /// twice. Wall cells do get enqueued but are discarded at dequeue
    /// without being traced or expanded. The search stops as soon as
    /// the end cell is dequeued, with the end included in the trace.
    pub fn bfs(&mut self, board: &Board) -> SearchReport {
        let mut state = SearchState::new(board.len());
        let mut visited_order = Vec::new();
        let start_idx = board.start_idx();
        let end_idx = board.end_idx();

        let mut queue: VecDeque<usize> = VecDeque::new();
        state.visited[start_idx] = true;
        queue.push_back(start_idx);

        while let Some(ci) = queue.pop_front() {
            let cp = board.point(ci);
            if board.is_wall(cp) {
                continue;
            }
            visited_order.push(cp);
            if ci == end_idx {
                break;
            }

            board.neighbors(cp, &mut self.nbuf);
            for &np in self.nbuf.iter() {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if !state.visited[ni] {
                    state.visited[ni] = true;
                    state.predecessor[ni] = Some(ci);
                    queue.push_back(ni);
                }
            }
        }

        finish(board, &state, visited_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;
    use gridroute_core::Point;

    #[test]
    fn expands_in_level_order() {
        let mut board = Board::new(3, 3);
        board.set_end(Point::new(2, 2)).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.bfs(&board);
        // Ring 0, then ring 1 in discovery order, then ring 2...
        assert_eq!(report.visited[0], Point::new(0, 0));
        assert_eq!(&report.visited[1..3], &[Point::new(0, 1), Point::new(1, 0)]);
        // Trace ends at the end cell.
        assert_eq!(*report.visited.last().unwrap(), Point::new(2, 2));
    }

    #[test]
    fn stops_once_end_is_dequeued() {
        let mut board = Board::new(5, 1);
        board.set_end(Point::new(2, 0)).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.bfs(&board);
        assert_eq!(*report.visited.last().unwrap(), Point::new(2, 0));
        // Cells past the end are never reached.
        assert!(!report.visited.contains(&Point::new(3, 0)));
        assert_eq!(
            report.outcome,
            Outcome::Path(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
        );
    }

    #[test]
    fn walls_never_appear_in_the_trace() {
        let mut board = Board::new(3, 3);
        board.set_end(Point::new(2, 2)).unwrap();
        board.set_wall(Point::new(1, 1), true).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.bfs(&board);
        assert!(!report.visited.contains(&Point::new(1, 1)));
        assert_eq!(report.path_len(), 5);
    }

    #[test]
    fn weights_are_ignored() {
        let mut board = Board::new(3, 1);
        board.set_end(Point::new(2, 0)).unwrap();
        board.set_weight(Point::new(1, 0), 20).unwrap();
        let mut pf = Pathfinder::new();
        let report = pf.bfs(&board);
        // Straight through the heavy cell; BFS has no cost model.
        assert_eq!(report.path_len(), 3);
    }
}
