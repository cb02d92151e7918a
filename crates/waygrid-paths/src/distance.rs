//! Grid distances and step costs.

use waygrid_core::Point;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = 1.4;

/// Manhattan (L1) distance between two points, in grid units.
///
/// This is the engine's fixed heuristic estimate. It ignores walls and
/// counts a diagonal as two steps, so it can overestimate across
/// 1.4-cost diagonals; routes found under it are not guaranteed optimal
/// in every wall layout.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cost of one move between two adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}
