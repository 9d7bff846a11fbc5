//! The editable grid board: walls, weights, and the start/end pair.
//!
//! Cells live in a dense arena indexed `y * width + x`; edges are
//! implicit (every in-bounds orthogonal neighbor) and never
//! materialized. The cost of stepping from a cell onto neighbor `b`
//! is `1 + b.weight`, which may be negative.

use std::fmt;

use crate::geom::Point;

/// Suggested weight for lightly penalized terrain.
pub const WEIGHT_LIGHT: i32 = 5;
/// Suggested weight for heavily penalized terrain.
pub const WEIGHT_HEAVY: i32 = 20;
/// Suggested negative weight. Two adjacent cells at this weight form
/// a negative cycle (each edge costs −4).
pub const WEIGHT_NEGATIVE: i32 = -5;

/// Per-cell terrain attributes. A cell is a wall or carries a weight,
/// never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub wall: bool,
    pub weight: i32,
}

/// A fixed-size rectangular grid with a single start/end pair.
///
/// Dimensions are fixed for the board's lifetime. Exactly one cell is
/// the start and exactly one the end; neither can be a wall. The two
/// coincide only on a 1×1 board, where the single cell plays both
/// roles; on larger boards they are always distinct. Mutating
/// operations that would break those invariants fail with
/// [`BoardError`] and leave the board unchanged.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start: Point,
    end: Point,
}

impl Board {
    /// Create an open board of the given dimensions.
    ///
    /// The start defaults to the top-left corner, the end to the
    /// bottom-right corner. On a 1×1 board those are the same cell,
    /// which then serves as both endpoints.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            tiles: vec![Tile::default(); (width as usize) * (height as usize)],
            start: Point::ZERO,
            end: Point::new(width - 1, height - 1),
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `p` is inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to its dense index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Convert a dense index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Dense index of the start cell (always in bounds).
    #[inline]
    pub fn start_idx(&self) -> usize {
        (self.start.y as usize) * (self.width as usize) + self.start.x as usize
    }

    /// Dense index of the end cell (always in bounds).
    #[inline]
    pub fn end_idx(&self) -> usize {
        (self.end.y as usize) * (self.width as usize) + self.end.x as usize
    }

    /// Whether `p` is a wall. Out-of-bounds reads as open.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.tiles[i].wall)
    }

    /// The weight of `p`. Out-of-bounds reads as 0.
    #[inline]
    pub fn weight(&self, p: Point) -> i32 {
        self.idx(p).map_or(0, |i| self.tiles[i].weight)
    }

    /// Set or clear the wall flag at `p`. Setting a wall clears any
    /// weight. The start and end cells can never be walls.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), BoardError> {
        let i = self.editable_idx(p)?;
        self.tiles[i] = Tile { wall, weight: 0 };
        Ok(())
    }

    /// Set the weight at `p`; any `i32` is accepted (see the
    /// `WEIGHT_*` constants for the recognized tiers). Clears the
    /// wall flag. The start and end cells cannot be edited.
    pub fn set_weight(&mut self, p: Point, weight: i32) -> Result<(), BoardError> {
        let i = self.editable_idx(p)?;
        self.tiles[i] = Tile {
            wall: false,
            weight,
        };
        Ok(())
    }

    /// Move the start cell. Refused if `p` is out of bounds, a wall,
    /// or the end cell.
    pub fn set_start(&mut self, p: Point) -> Result<(), BoardError> {
        if !self.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        if self.is_wall(p) || p == self.end {
            return Err(BoardError::InvalidEndpoint(p));
        }
        self.start = p;
        Ok(())
    }

    /// Move the end cell. Refused if `p` is out of bounds, a wall,
    /// or the start cell.
    pub fn set_end(&mut self, p: Point) -> Result<(), BoardError> {
        if !self.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        if self.is_wall(p) || p == self.start {
            return Err(BoardError::InvalidEndpoint(p));
        }
        self.end = p;
        Ok(())
    }

    /// Reset every cell to open with weight 0, keeping the endpoints.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::default());
    }

    /// Whether any cell carries a negative weight. Dijkstra and A*
    /// accept such boards but their results are no longer guaranteed
    /// optimal; callers can use this to warn.
    pub fn has_negative_weights(&self) -> bool {
        self.tiles.iter().any(|t| t.weight < 0)
    }

    /// Append the in-bounds orthogonal neighbors of `p` into `buf`
    /// (cleared first), in up, down, left, right order.
    ///
    /// The order is fixed: visit traces and DFS's reversed pushes
    /// depend on it.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        const DIRS: [Point; 4] = [
            Point::new(0, -1),
            Point::new(0, 1),
            Point::new(-1, 0),
            Point::new(1, 0),
        ];
        for d in DIRS {
            let n = p + d;
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    fn editable_idx(&self, p: Point) -> Result<usize, BoardError> {
        let Some(i) = self.idx(p) else {
            return Err(BoardError::OutOfBounds(p));
        };
        if p == self.start || p == self.end {
            return Err(BoardError::InvalidEndpoint(p));
        }
        Ok(i)
    }
}

/// Errors from board editing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The position lies outside the board.
    OutOfBounds(Point),
    /// The operation would break the start/end invariants: moving an
    /// endpoint onto a wall or the other endpoint, or painting over
    /// an endpoint.
    InvalidEndpoint(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the board"),
            Self::InvalidEndpoint(p) => write!(f, "position {p} conflicts with a start/end cell"),
        }
    }
}

impl std::error::Error for BoardError {}
