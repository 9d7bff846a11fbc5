//! **gridroute-core** — Grid pathfinding engine (board model).
//!
//! This crate provides the shared grid model used by the gridroute
//! search algorithms: the [`Point`] geometry primitive and the
//! editable [`Board`] of walls, weights, and the start/end pair.

pub mod board;
pub mod geom;

pub use board::{Board, BoardError, Tile, WEIGHT_HEAVY, WEIGHT_LIGHT, WEIGHT_NEGATIVE};
pub use geom::Point;
