use std::fmt;

use crate::spatial::position::Direction;

/// Ranked headings probed when the automaton has to route around an obstacle
///
/// Always holds each of the four headings exactly once. The inverter cell
/// reverses the ranking in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriorityList {
    order: [Direction; 4],
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityList {
    /// Default ranking: South, East, North, West
    pub const fn new() -> Self {
        Self {
            order: Direction::ALL,
        }
    }

    /// Reverse the ranking in place (first with fourth, second with third)
    pub const fn invert(&mut self) {
        let [a, b, c, d] = self.order;
        self.order = [d, c, b, a];
    }

    /// Whether the ranking currently differs from the default
    pub fn is_inverted(&self) -> bool {
        self.order != Direction::ALL
    }

    /// Headings in probing order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.order.iter().copied()
    }

    /// Headings in probing order as an array
    pub const fn as_array(&self) -> [Direction; 4] {
        self.order
    }
}

impl fmt::Display for PriorityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.order.iter().map(|d| d.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
