use courier_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// The push order is significant: among equal-cost candidates, cells are
    /// expanded in the order their discoverer pushed them.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the step distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
