//! Grid coordinates and the four compass headings

use std::fmt;

/// Compass heading of the automaton
///
/// The declaration order is the default obstacle priority order, so the
/// derived `Ord` ranks South first and West last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards increasing row index
    South,
    /// Towards increasing column index
    East,
    /// Towards decreasing row index
    North,
    /// Towards decreasing column index
    West,
}

impl Direction {
    /// All headings in default priority order
    pub const ALL: [Self; 4] = [Self::South, Self::East, Self::North, Self::West];

    /// Heading pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::South => Self::North,
            Self::East => Self::West,
            Self::North => Self::South,
            Self::West => Self::East,
        }
    }

    /// Upper-case name used in run reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::North => "NORTH",
            Self::West => "WEST",
        }
    }

    /// Dense index in `0..4`, following declaration order
    pub const fn index(self) -> usize {
        match self {
            Self::South => 0,
            Self::East => 1,
            Self::North => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-based (row, column) cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row index, 0 is the top contour row
    pub row: usize,
    /// Column index, 0 is the left contour column
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position one cell away in `direction`
    ///
    /// Coordinates saturate at zero and at `usize::MAX`, so the result is
    /// always representable; callers decide whether it lies inside the grid.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> Self {
        match direction {
            Direction::South => Self::new(self.row.saturating_add(1), self.col),
            Direction::East => Self::new(self.row, self.col.saturating_add(1)),
            Direction::North => Self::new(self.row.saturating_sub(1), self.col),
            Direction::West => Self::new(self.row, self.col.saturating_sub(1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
