use courier_core::Point;

// ---------------------------------------------------------------------------
// Internal node arena for A* searches
// ---------------------------------------------------------------------------

/// Arena slot for one grid cell during a search. `parent` is an index into
/// the same arena (`usize::MAX` = no predecessor); nodes never outlive the
/// search that stamped their generation.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry ordered for use in `BinaryHeap`.
///
/// The ordering policy for popping: lowest `f` first; equal `f` resolved by
/// lowest `seq` (insertion order). Pinning the tie-break keeps equal-cost
/// results reproducible across runs.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchField
// ---------------------------------------------------------------------------

/// Reusable search state for a width×height grid.
///
/// `SearchField` owns the node arena and the neighbor scratch buffer, so
/// repeated searches incur no allocations after the first use. Nodes are
/// invalidated lazily between searches by bumping a generation counter, so
/// no state leaks from one search into the next.
pub struct SearchField {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchField {
    /// Create a new `SearchField` for a grid of the given size
    /// (width = `size.x`, height = `size.y`).
    pub fn new(size: Point) -> Self {
        let width = size.x.max(0) as usize;
        let height = size.y.max(0) as usize;
        Self {
            width,
            height,
            astar_nodes: vec![Node::default(); width * height],
            astar_generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid size this field was created for.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
