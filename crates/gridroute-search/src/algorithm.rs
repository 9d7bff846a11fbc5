//! The closed set of supported algorithms.

use std::fmt;
use std::str::FromStr;

/// Algorithm selector. Dispatch over this enum is exhaustive, so an
/// unrecognized selector can only fail at parse time (as
/// [`UnknownAlgorithm`]) rather than silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    BellmanFord,
}

impl Algorithm {
    /// All selectors, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::BellmanFord,
    ];

    /// The canonical selector string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
            Algorithm::BellmanFord => "bellmanford",
        }
    }

    /// Whether the algorithm accounts for edge weights.
    pub const fn is_weighted(self) -> bool {
        match self {
            Algorithm::Bfs | Algorithm::Dfs => false,
            Algorithm::Dijkstra | Algorithm::Astar | Algorithm::BellmanFord => true,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Error for an algorithm selector outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of bfs, dfs, dijkstra, astar, bellmanford)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}
