use gridroute_core::Board;

use crate::Pathfinder;
use crate::pathfinder::finish;
use crate::report::SearchReport;
use crate::state::SearchState;

impl Pathfinder {
    /// Depth-first search. Not a shortest-path algorithm: it returns
    /// the first route the stack discipline happens to find.
    ///
    /// Cells are marked visited at pop time; walls and already
    /// visited cells are skipped there. Neighbors are pushed in
    /// reversed adjacency order so they pop back out in the natural
    /// up, down, left, right order despite the stack's LIFO order.
    /// The predecessor of a pending cell is overwritten by each later
    /// push until the cell is popped.
    pub fn dfs(&mut self, board: &Board) -> SearchReport {
        let mut state = SearchState::new(board.len());
        let mut visited_order = Vec::new();
        let end_idx = board.end_idx();

        let mut stack: Vec<usize> = vec![board.start_idx()];

        while let Some(ci) = stack.pop() {
            let cp = board.point(ci);
            if board.is_wall(cp) || state.visited[ci] {
                continue;
            }
            state.visited[ci] = true;
            visited_order.push(cp);
            if ci == end_idx {
                break;
            }

            board.neighbors(cp, &mut self.nbuf);
            for &np in self.nbuf.iter().rev() {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if !state.visited[ni] {
                    state.predecessor[ni] = Some(ci);
                    stack.push(ni);
                }
            }
        }

        finish(board, &state, visited_order)
    }
}
