//! Run results handed back to the caller.

use gridroute_core::Point;

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// A route from start to end, both inclusive; consecutive cells
    /// are orthogonally adjacent.
    Path(Vec<Point>),
    /// The end cell was never given a predecessor.
    NoPath,
    /// Bellman-Ford only: a negative cycle exists. Carries the cells
    /// still relaxable after `N − 1` passes — the frontier touched by
    /// the cycle, not a full cycle enumeration.
    NegativeCycle(Vec<Point>),
}

/// The full result of one algorithm run: the visit trace in expansion
/// order plus the terminal [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Cells in the order the algorithm expanded them. For
    /// Bellman-Ford a cell appears once per pass that relaxed it.
    pub visited: Vec<Point>,
    pub outcome: Outcome,
}

impl SearchReport {
    /// Number of entries in the visit trace.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// The reconstructed path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match &self.outcome {
            Outcome::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Path length in cells; 0 when no path was found.
    pub fn path_len(&self) -> usize {
        self.path().map_or(0, <[Point]>::len)
    }

    /// Whether a negative cycle was detected.
    pub fn cycle_detected(&self) -> bool {
        matches!(self.outcome, Outcome::NegativeCycle(_))
    }

    /// The cycle-adjacent cells, if a cycle was detected.
    pub fn cycle_cells(&self) -> Option<&[Point]> {
        match &self.outcome {
            Outcome::NegativeCycle(cells) => Some(cells),
            _ => None,
        }
    }
}
