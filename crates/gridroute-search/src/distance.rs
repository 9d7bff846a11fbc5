use gridroute_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The A* heuristic for 4-way movement: admissible and consistent
/// only while every edge cost is non-negative.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
