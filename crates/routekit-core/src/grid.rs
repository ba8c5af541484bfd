//! The obstacle map: [`Tile`] and [`Grid`].
//!
//! A [`Grid`] is an owned rectangular array of [`Tile`]s. It is plain data:
//! the pathfinding crate only ever reads it, and mutators exist for
//! construction.

use std::fmt;

use crate::geom::{Point, Range};

/// A map cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Open ground; search may step here.
    #[default]
    Passable,
    /// An obstacle; search never steps here.
    Blocked,
}

impl Tile {
    /// Whether the tile can be stepped on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Tile::Passable)
    }
}

/// A rectangular 2D grid of [`Tile`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with
    /// [`Tile::Passable`].
    ///
    /// Returns [`GridError::EmptyGrid`] unless both dimensions are ≥ 1.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::EmptyGrid);
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            tiles: vec![Tile::default(); bounds.len()],
            bounds,
        })
    }

    /// Build a grid from rows of integer markers: `0` = passable,
    /// `1` = blocked.
    ///
    /// Fails if the rows are empty, ragged, or contain any other marker.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentSize {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &marker) in row.iter().enumerate() {
                tiles.push(match marker {
                    0 => Tile::Passable,
                    1 => Tile::Blocked,
                    _ => {
                        return Err(GridError::InvalidMarker {
                            value: marker,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                });
            }
        }
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// Parse a grid from an ASCII sketch: `.` = passable, `#` = blocked.
    ///
    /// Lines must all have the same width. Any other character fails with
    /// [`GridError::InvalidRune`].
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (y, line) in lines.iter().enumerate() {
            let count = line.chars().count();
            if count != width {
                return Err(GridError::InconsistentSize {
                    row: y,
                    expected: width,
                    found: count,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                tiles.push(match ch {
                    '.' => Tile::Passable,
                    '#' => Tile::Blocked,
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                });
            }
        }
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.bounds.width() as usize) + (p.x as usize)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Fill the entire grid with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }
}

/// Errors from grid construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Both grid dimensions must be at least 1.
    EmptyGrid,
    /// Rows have inconsistent widths.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An ASCII sketch character outside the allowed set.
    InvalidRune { ch: char, pos: Point },
    /// An integer marker other than 0 or 1.
    InvalidMarker { value: i32, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be at least 1x1"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidMarker { value, pos } => {
                write!(f, "grid contains invalid marker {value} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
