//! Map cell alphabet

use crate::spatial::position::Direction;
use std::fmt;

/// Content of a single map cell
///
/// The symbol of the cell the automaton enters selects the handler that runs
/// on the next iteration. Characters outside the alphabet are kept verbatim as
/// `Other` because the map is never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `@` starting cell
    Start,
    /// `$` goal cell
    Stop,
    /// `#` impassable outer wall
    ContourObstacle,
    /// `X` wall that can be broken through in beer mode
    InternalObstacle,
    /// `S`, `E`, `N` or `W` cell forcing a new heading
    Push(Direction),
    /// `I` cell reversing the obstacle priority order
    Inverter,
    /// `B` cell toggling beer mode
    BeerToggle,
    /// `T` cell linked to its partner teleporter
    Teleporter,
    /// ` ` free cell
    Space,
    /// Any character outside the alphabet
    Other(char),
}

impl Symbol {
    /// Number of distinct values returned by [`Symbol::index`]
    pub const KINDS: usize = 13;

    /// Decode a map character
    pub const fn from_char(c: char) -> Self {
        match c {
            '@' => Self::Start,
            '$' => Self::Stop,
            '#' => Self::ContourObstacle,
            'X' => Self::InternalObstacle,
            'S' => Self::Push(Direction::South),
            'E' => Self::Push(Direction::East),
            'N' => Self::Push(Direction::North),
            'W' => Self::Push(Direction::West),
            'I' => Self::Inverter,
            'B' => Self::BeerToggle,
            'T' => Self::Teleporter,
            ' ' => Self::Space,
            other => Self::Other(other),
        }
    }

    /// Encode back to the map character
    pub const fn as_char(self) -> char {
        match self {
            Self::Start => '@',
            Self::Stop => '$',
            Self::ContourObstacle => '#',
            Self::InternalObstacle => 'X',
            Self::Push(Direction::South) => 'S',
            Self::Push(Direction::East) => 'E',
            Self::Push(Direction::North) => 'N',
            Self::Push(Direction::West) => 'W',
            Self::Inverter => 'I',
            Self::BeerToggle => 'B',
            Self::Teleporter => 'T',
            Self::Space => ' ',
            Self::Other(c) => c,
        }
    }

    /// Whether the symbol blocks movement and triggers obstacle resolution
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Self::ContourObstacle | Self::InternalObstacle)
    }

    /// Dense index in `0..Symbol::KINDS`, all `Other` characters share the last slot
    pub const fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Stop => 1,
            Self::ContourObstacle => 2,
            Self::InternalObstacle => 3,
            Self::Push(direction) => 4 + direction.index(),
            Self::Inverter => 8,
            Self::BeerToggle => 9,
            Self::Teleporter => 10,
            Self::Space => 11,
            Self::Other(_) => 12,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_char())
    }
}
