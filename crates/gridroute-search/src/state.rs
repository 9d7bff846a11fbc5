//! Per-run search state.

/// Sentinel distance meaning "not reached" (+∞ for relaxation
/// comparisons).
pub const UNREACHABLE: i64 = i64::MAX;

/// Transient per-cell search data, indexed by the board's dense cell
/// index.
///
/// Costs are carried as `i64` even though weights are `i32`:
/// accumulated distances can exceed the `i32` range when weights
/// approach its limits, and the relaxation arithmetic must stay
/// exact for any weight the board accepts.
///
/// A fresh `SearchState` is allocated for every run: that *is* the
/// reset step, so no distances, visited flags, or predecessor chains
/// can leak between runs, and two runs on the same board are
/// trivially comparable.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Best known cost from the start cell (g-cost).
    pub distance: Vec<i64>,
    /// Heuristic cost to the end cell. A* only.
    pub h_cost: Vec<i64>,
    /// Combined `g + h` cost. A* only.
    pub f_cost: Vec<i64>,
    /// Expanded (or, for BFS, discovered) flags.
    pub visited: Vec<bool>,
    /// Back-pointer to the predecessor on the current best path.
    pub predecessor: Vec<Option<usize>>,
}

impl SearchState {
    /// Fresh state for a board of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            distance: vec![UNREACHABLE; len],
            h_cost: vec![UNREACHABLE; len],
            f_cost: vec![UNREACHABLE; len],
            visited: vec![false; len],
            predecessor: vec![None; len],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreached() {
        let s = SearchState::new(6);
        assert_eq!(s.distance, vec![UNREACHABLE; 6]);
        assert_eq!(s.h_cost, vec![UNREACHABLE; 6]);
        assert_eq!(s.f_cost, vec![UNREACHABLE; 6]);
        assert!(s.visited.iter().all(|&v| !v));
        assert!(s.predecessor.iter().all(Option::is_none));
    }
}
