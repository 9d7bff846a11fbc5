use gridroute_core::{Board, Point};
use log::debug;

use crate::algorithm::Algorithm;
use crate::path;
use crate::report::{Outcome, SearchReport};
use crate::state::SearchState;

/// Central coordinator for running searches on a [`Board`].
///
/// `Pathfinder` owns the shared neighbor scratch buffer and exposes
/// one entry point per algorithm plus [`run`](Self::run) for
/// selector-driven dispatch. Every run borrows the pathfinder
/// mutably and the board immutably for its whole duration, so at
/// most one computation can be active and the board cannot be edited
/// mid-run. Runs are synchronous and uninterruptible; there is no
/// cancellation primitive, and under negative weights Dijkstra/A*
/// carry no termination-time guarantee (Bellman-Ford is always
/// bounded by `O(V·E)`).
pub struct Pathfinder {
    pub(crate) nbuf: Vec<Point>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// Create a new pathfinder.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run the selected algorithm on `board` to completion.
    ///
    /// All search state is freshly allocated per run, so repeated
    /// runs on an unchanged board are identical.
    pub fn run(&mut self, board: &Board, algorithm: Algorithm) -> SearchReport {
        debug!(
            "running {algorithm} on {}x{} board, start {} end {}",
            board.width(),
            board.height(),
            board.start(),
            board.end(),
        );
        let report = match algorithm {
            Algorithm::Bfs => self.bfs(board),
            Algorithm::Dfs => self.dfs(board),
            Algorithm::Dijkstra => self.dijkstra(board),
            Algorithm::Astar => self.astar(board),
            Algorithm::BellmanFord => self.bellman_ford(board),
        };
        debug!(
            "{algorithm}: visited {}, path {}, cycle {}",
            report.visited_count(),
            report.path_len(),
            report.cycle_detected(),
        );
        report
    }
}

/// Assemble the report for a completed (non-cycle) run.
pub(crate) fn finish(board: &Board, state: &SearchState, visited: Vec<Point>) -> SearchReport {
    let outcome = match path::reconstruct(board, state) {
        Some(p) => Outcome::Path(p),
        None => Outcome::NoPath,
    };
    SearchReport { visited, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Point;

    fn open_board_5x5() -> Board {
        let mut b = Board::new(5, 5);
        b.set_start(Point::new(0, 0)).unwrap();
        b.set_end(Point::new(4, 4)).unwrap();
        b
    }

    /// A solid wall column at x = 2, open only at y = 4.
    fn walled_board_5x5() -> Board {
        let mut b = open_board_5x5();
        for y in 0..4 {
            b.set_wall(Point::new(2, y), true).unwrap();
        }
        b
    }

    fn assert_path_is_connected(board: &Board, report: &SearchReport) {
        let path = report.path().expect("expected a path");
        assert_eq!(path[0], board.start());
        assert_eq!(*path.last().unwrap(), board.end());
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn open_grid_bfs_and_dijkstra_agree_on_length() {
        let board = open_board_5x5();
        let mut pf = Pathfinder::new();
        let bfs = pf.run(&board, Algorithm::Bfs);
        let dij = pf.run(&board, Algorithm::Dijkstra);
        // Manhattan distance 8 => 9 cells.
        assert_eq!(bfs.path_len(), 9);
        assert_eq!(dij.path_len(), 9);
        assert_path_is_connected(&board, &bfs);
        assert_path_is_connected(&board, &dij);
    }

    #[test]
    fn all_algorithms_route_through_the_opening() {
        let board = walled_board_5x5();
        let mut pf = Pathfinder::new();
        for algorithm in Algorithm::ALL {
            let report = pf.run(&board, algorithm);
            let path = report.path().unwrap_or_else(|| {
                panic!("{algorithm} found no path");
            });
            assert!(
                path.contains(&Point::new(2, 4)),
                "{algorithm} avoided the opening: {path:?}"
            );
            assert_path_is_connected(&board, &report);
        }
    }

    #[test]
    fn every_path_is_endpoint_to_endpoint_adjacent() {
        let mut board = open_board_5x5();
        board.set_weight(Point::new(1, 0), 20).unwrap();
        board.set_weight(Point::new(0, 1), 5).unwrap();
        board.set_wall(Point::new(3, 3), true).unwrap();
        let mut pf = Pathfinder::new();
        for algorithm in Algorithm::ALL {
            let report = pf.run(&board, algorithm);
            assert_path_is_connected(&board, &report);
        }
    }

    #[test]
    fn runs_are_idempotent() {
        let mut board = walled_board_5x5();
        board.set_weight(Point::new(3, 4), 5).unwrap();
        let mut pf = Pathfinder::new();
        for algorithm in Algorithm::ALL {
            let first = pf.run(&board, algorithm);
            let second = pf.run(&board, algorithm);
            assert_eq!(first, second, "{algorithm} not idempotent");
        }
    }

    #[test]
    fn dijkstra_and_bellman_ford_agree_without_negative_weights() {
        let mut board = open_board_5x5();
        board.set_weight(Point::new(1, 0), 20).unwrap();
        board.set_weight(Point::new(2, 0), 20).unwrap();
        board.set_weight(Point::new(1, 1), 5).unwrap();
        board.set_wall(Point::new(2, 2), true).unwrap();
        assert!(!board.has_negative_weights());

        let cost = |board: &Board, path: &[Point]| -> i32 {
            path[1..].iter().map(|&p| 1 + board.weight(p)).sum()
        };

        let mut pf = Pathfinder::new();
        let dij = pf.run(&board, Algorithm::Dijkstra);
        let bf = pf.run(&board, Algorithm::BellmanFord);
        assert_eq!(
            cost(&board, dij.path().unwrap()),
            cost(&board, bf.path().unwrap()),
        );
    }

    #[test]
    fn unreachable_end_reports_no_path() {
        let mut board = open_board_5x5();
        // Seal off the end cell completely.
        board.set_wall(Point::new(3, 4), true).unwrap();
        board.set_wall(Point::new(4, 3), true).unwrap();
        let mut pf = Pathfinder::new();
        for algorithm in Algorithm::ALL {
            let report = pf.run(&board, algorithm);
            assert_eq!(report.outcome, Outcome::NoPath, "{algorithm}");
            assert_eq!(report.path_len(), 0);
        }
    }

    #[test]
    fn single_cell_board_is_its_own_path() {
        // 1x1 is the one board where start and end coincide; every
        // algorithm must report the trivial one-cell route.
        let board = Board::new(1, 1);
        let mut pf = Pathfinder::new();
        for algorithm in Algorithm::ALL {
            let report = pf.run(&board, algorithm);
            assert_eq!(
                report.outcome,
                Outcome::Path(vec![Point::new(0, 0)]),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn selector_strings_drive_dispatch() {
        let board = open_board_5x5();
        let mut pf = Pathfinder::new();
        let report = pf.run(&board, "astar".parse().unwrap());
        assert_eq!(report.path_len(), 9);
        assert!("spf".parse::<Algorithm>().is_err());
    }
}
