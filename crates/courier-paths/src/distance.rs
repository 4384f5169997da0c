use courier_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the exact step distance on an unobstructed 4-connected grid, so
/// it is admissible and consistent as an A* heuristic there.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
