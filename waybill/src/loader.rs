//! Flat-file input: delivery-area maps and stop manifests.
//!
//! Map files start with a `rows cols` header followed by `rows * cols`
//! whitespace-separated cell codes in row-major order (0 free, 1 obstacle,
//! 2 depot). Stop manifests hold one `x y priority` line per stop, where
//! `x` is the column and `y` the row.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use courier_core::{Cell, GridMap, MapError, Point};
use log::warn;

use crate::stop::{Stop, Tier};

/// Read and parse a map file.
pub fn load_map(path: &Path) -> Result<GridMap, LoadError> {
    parse_map(&fs::read_to_string(path)?)
}

/// Read and parse a stop manifest.
pub fn load_stops(path: &Path) -> Result<Vec<Stop>, LoadError> {
    parse_stops(&fs::read_to_string(path)?)
}

/// Parse map text: `rows cols` header, then row-major cell codes.
pub fn parse_map(input: &str) -> Result<GridMap, LoadError> {
    let mut tokens = input.split_whitespace();
    let rows = int_token(tokens.next())?;
    let cols = int_token(tokens.next())?;

    let mut cells = Vec::new();
    for tok in tokens {
        let code = int_token(Some(tok))?;
        let cell = Cell::from_code(code).ok_or(LoadError::BadCellCode(code))?;
        cells.push(cell);
    }
    Ok(GridMap::from_cells(cols, rows, cells)?)
}

/// Parse a stop manifest: one `x y priority` line per stop.
///
/// Blank lines are skipped. Lines whose priority falls outside the three
/// known ranks are dropped with a warning; the closed [`Tier`] type cannot
/// represent them past this boundary. Coordinates are *not* checked against
/// any map here; a stop lying out of bounds or on an obstacle simply
/// reports as unreachable when planned.
pub fn parse_stops(input: &str) -> Result<Vec<Stop>, LoadError> {
    let mut stops = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let bad_line = || LoadError::StopLine {
            line: i + 1,
            content: line.to_string(),
        };
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let &[x, y, rank] = fields.as_slice() else {
            return Err(bad_line());
        };
        let x: i32 = x.parse().map_err(|_| bad_line())?;
        let y: i32 = y.parse().map_err(|_| bad_line())?;
        let rank: i32 = rank.parse().map_err(|_| bad_line())?;

        match Tier::from_rank(rank) {
            Some(tier) => stops.push(Stop::new(Point::new(x, y), tier)),
            None => warn!("stop ({x}, {y}): priority {rank} outside 1..=3, dropped"),
        }
    }
    Ok(stops)
}

fn int_token(tok: Option<&str>) -> Result<i32, LoadError> {
    let tok = tok.ok_or(LoadError::MissingHeader)?;
    tok.parse()
        .map_err(|_| LoadError::BadToken(tok.to_string()))
}

/// Errors that can occur while loading input files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The cell data does not form a valid map.
    Map(MapError),
    /// The map file ends before the `rows cols` header is complete.
    MissingHeader,
    /// A token that should be an integer is not.
    BadToken(String),
    /// A cell code outside the known encoding.
    BadCellCode(i32),
    /// A stop manifest line that does not parse as `x y priority`.
    StopLine { line: usize, content: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read: {e}"),
            Self::Map(e) => write!(f, "{e}"),
            Self::MissingHeader => write!(f, "map: missing rows/cols header"),
            Self::BadToken(t) => write!(f, "map: expected an integer, found \u{201c}{t}\u{201d}"),
            Self::BadCellCode(c) => write!(f, "map: unknown cell code {c}"),
            Self::StopLine { line, content } => {
                write!(f, "stops: line {line} is not \u{201c}x y priority\u{201d}: {content}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MapError> for LoadError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}
