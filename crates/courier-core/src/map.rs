//! The delivery-area map: cell states and the depot position.

use std::fmt;

use crate::Point;

/// State of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open ground a route may cross.
    Free,
    /// Blocked; routes never enter this cell.
    Obstacle,
    /// The courier depot. Traversable; exactly one per map.
    Depot,
}

impl Cell {
    /// Decode the integer encoding used by map files
    /// (0 = free, 1 = obstacle, 2 = depot).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Cell::Free),
            1 => Some(Cell::Obstacle),
            2 => Some(Cell::Depot),
            _ => None,
        }
    }

    /// Whether a route may enter this cell.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Cell::Obstacle)
    }
}

/// An immutable rows×cols map of [`Cell`] states.
///
/// Cells are stored row-major. The map never changes after construction;
/// all route planning for a run reads from the same `GridMap`.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    depot: Point,
}

impl GridMap {
    /// Build a map from row-major cells.
    ///
    /// Validates that the dimensions are positive, that `cells` has exactly
    /// `width * height` entries, and that exactly one cell is the depot.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::BadSize { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(MapError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let mut depot = None;
        for (i, &c) in cells.iter().enumerate() {
            if c == Cell::Depot {
                let p = Point::new(i as i32 % width, i as i32 / width);
                if depot.replace(p).is_some() {
                    return Err(MapError::DuplicateDepot(p));
                }
            }
        }
        let depot = depot.ok_or(MapError::NoDepot)?;
        Ok(Self {
            width,
            height,
            cells,
            depot,
        })
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies within the map bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Whether `p` is in bounds and not an obstacle.
    pub fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::passable)
    }

    /// The depot position marked in the map.
    #[inline]
    pub fn depot(&self) -> Point {
        self.depot
    }
}

/// Errors that can occur when building a [`GridMap`].
#[derive(Debug, Clone)]
pub enum MapError {
    /// Width or height is zero or negative.
    BadSize { width: i32, height: i32 },
    /// The cell buffer does not match the declared dimensions.
    CellCount { expected: usize, found: usize },
    /// No cell carries the depot marker.
    NoDepot,
    /// A second depot marker was found at this position.
    DuplicateDepot(Point),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSize { width, height } => {
                write!(f, "map: invalid dimensions {width}x{height}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "map: expected {expected} cells, found {found}")
            }
            Self::NoDepot => write!(f, "map: no depot cell"),
            Self::DuplicateDepot(p) => write!(f, "map: second depot at {p}"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(codes: &[i32]) -> Vec<Cell> {
        codes.iter().map(|&c| Cell::from_code(c).unwrap()).collect()
    }

    #[test]
    fn build_and_query() {
        let m = GridMap::from_cells(3, 2, cells(&[0, 1, 0, 2, 0, 1])).unwrap();
        assert_eq!(m.size(), Point::new(3, 2));
        assert_eq!(m.at(Point::new(1, 0)), Some(Cell::Obstacle));
        assert_eq!(m.at(Point::new(0, 1)), Some(Cell::Depot));
        assert_eq!(m.at(Point::new(3, 0)), None);
        assert_eq!(m.depot(), Point::new(0, 1));
    }

    #[test]
    fn passable_excludes_obstacles_and_out_of_bounds() {
        let m = GridMap::from_cells(2, 2, cells(&[2, 1, 0, 0])).unwrap();
        assert!(m.passable(Point::new(0, 0))); // depot is traversable
        assert!(!m.passable(Point::new(1, 0)));
        assert!(m.passable(Point::new(1, 1)));
        assert!(!m.passable(Point::new(-1, 0)));
        assert!(!m.passable(Point::new(0, 2)));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            GridMap::from_cells(0, 2, Vec::new()),
            Err(MapError::BadSize { .. })
        ));
        assert!(matches!(
            GridMap::from_cells(2, -1, Vec::new()),
            Err(MapError::BadSize { .. })
        ));
    }

    #[test]
    fn rejects_cell_count_mismatch() {
        assert!(matches!(
            GridMap::from_cells(2, 2, cells(&[2, 0, 0])),
            Err(MapError::CellCount {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn rejects_missing_or_duplicate_depot() {
        assert!(matches!(
            GridMap::from_cells(2, 1, cells(&[0, 0])),
            Err(MapError::NoDepot)
        ));
        let err = GridMap::from_cells(2, 1, cells(&[2, 2])).unwrap_err();
        assert!(matches!(err, MapError::DuplicateDepot(p) if p == Point::new(1, 0)));
    }

    #[test]
    fn cell_codes() {
        assert_eq!(Cell::from_code(0), Some(Cell::Free));
        assert_eq!(Cell::from_code(1), Some(Cell::Obstacle));
        assert_eq!(Cell::from_code(2), Some(Cell::Depot));
        assert_eq!(Cell::from_code(3), None);
        assert_eq!(Cell::from_code(-1), None);
    }
}
