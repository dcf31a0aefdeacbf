//! The occupancy [`Grid`] searched by the pathfinder.
//!
//! A `Grid` owns a rectangular array of [`CellState`] values. Unlike a
//! shared-buffer view, it has no interior mutability: edit it through
//! `&mut Grid` while building a map, then hand out `&Grid` to any number of
//! searches (including searches on other threads).
//!
//! Rows are indexed by `y` and columns by `x`: [`Grid::from_rows`] takes
//! `rows[y][x]`, and [`Grid::parse`] reads one text line per row.

use std::fmt;

use crate::geom::{Point, Range, RangeIter};

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
}

impl CellState {
    /// Text-map character for this state.
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '#',
        }
    }

    /// Parse a text-map character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// A rectangular 2D occupancy map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData"))]
pub struct Grid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(d: GridData) -> Result<Self, GridError> {
        let expected = (d.width.max(0) as usize) * (d.height.max(0) as usize);
        if d.width < 0 || d.height < 0 || d.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: d.cells.len(),
            });
        }
        Ok(Self {
            cells: d.cells,
            width: d.width,
            height: d.height,
        })
    }
}

impl Grid {
    /// Create a new grid with every cell [`CellState::Open`].
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![CellState::Open; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Build a grid from `rows[y][x]`.
    ///
    /// Every row must have the same, non-zero length, and there must be at
    /// least one row.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.as_ref().len();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let (width, height) = dims(expected, rows.len())?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a text map: `.` is open, `#` is blocked, one line per row.
    ///
    /// Leading/trailing whitespace of the whole string is trimmed, as is
    /// trailing whitespace (including `\r`) on each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let row = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    CellState::from_char(ch).ok_or(GridError::InvalidRune {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The bounding range `(0, 0)..(width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(CellState::Open)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.index(p) {
            self.cells[i] = state;
        }
    }

    /// Count how many cells have the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

/// Convert row-based dimensions to grid coordinates.
fn dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the same text form accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.as_char())?;
            }
        }
        Ok(())
    }
}

/// Iterator over `(Point, CellState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.at(p)?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text map contains a character other than `.` or `#`.
    InvalidRune { ch: char, pos: Point },
    /// Stored cells do not match the stored dimensions.
    CellCount { expected: usize, found: usize },
    /// A dimension does not fit in an `i32` coordinate.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} cells stored, dimensions need {expected}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} exceeds the coordinate range")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("..#\n#..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_mismatched_cells() {
        let json = r#"{"cells":["Open","Blocked","Open"],"width":2,"height":2}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
