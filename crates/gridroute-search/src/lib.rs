//! Pathfinding algorithms for the gridroute grid model.
//!
//! This crate implements five traversal / shortest-path algorithms
//! over a [`gridroute_core::Board`], sharing one per-run search
//! state:
//!
//! - **BFS** level-order traversal ([`Pathfinder::bfs`])
//! - **DFS** stack traversal ([`Pathfinder::dfs`])
//! - **Dijkstra** cost-aware search ([`Pathfinder::dijkstra`])
//! - **A\*** heuristic search ([`Pathfinder::astar`])
//! - **Bellman-Ford** with negative-cycle detection
//!   ([`Pathfinder::bellman_ford`])
//!
//! All algorithms run through [`Pathfinder`], which owns the shared
//! scratch buffers; [`Pathfinder::run`] dispatches on the closed
//! [`Algorithm`] selector. Every run returns a [`SearchReport`]: the
//! visit trace in expansion order plus an [`Outcome`] — a
//! start-to-end path, an explicit no-path result, or (Bellman-Ford
//! only) the cells touched by a negative cycle.
//!
//! Edge costs are `1 + destination.weight` and may be negative;
//! Dijkstra and A* accept negative weights without validation but
//! then lose their optimality guarantee.

mod algorithm;
mod astar;
mod bellman;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod heap;
mod path;
mod pathfinder;
mod report;
mod state;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use distance::manhattan;
pub use heap::MinHeap;
pub use path::reconstruct;
pub use pathfinder::Pathfinder;
pub use report::{Outcome, SearchReport};
pub use state::{SearchState, UNREACHABLE};
