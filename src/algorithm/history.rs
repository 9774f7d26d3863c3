//! Ordered record of committed headings with a non-termination ceiling

use crate::spatial::position::Direction;

/// Append-only list of headings that produced an actual move
///
/// Failed probes and teleports are never recorded. The ceiling is the
/// non-termination heuristic: once the history holds `ceiling` entries the
/// controller stops and reports the run as looping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHistory {
    entries: Vec<Direction>,
    ceiling: usize,
}

impl RunHistory {
    /// Create an empty history that fills up after `ceiling` moves
    pub const fn new(ceiling: usize) -> Self {
        Self {
            entries: Vec::new(),
            ceiling,
        }
    }

    /// Record a committed move
    ///
    /// Moves beyond the ceiling are dropped, the history never grows past it.
    pub fn record(&mut self, direction: Direction) {
        if self.entries.len() < self.ceiling {
            self.entries.push(direction);
        }
    }

    /// Whether the ceiling has been reached
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.ceiling
    }

    /// Number of recorded moves
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no move has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured maximum length
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Most recent move
    pub fn last(&self) -> Option<Direction> {
        self.entries.last().copied()
    }

    /// Recorded moves in order
    pub fn as_slice(&self) -> &[Direction] {
        &self.entries
    }

    /// Iterate over recorded moves in order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.entries.iter().copied()
    }

    /// Collapse consecutive identical moves into (heading, count) runs
    pub fn runs(&self) -> Vec<(Direction, usize)> {
        let mut runs: Vec<(Direction, usize)> = Vec::new();
        for direction in self.iter() {
            match runs.last_mut() {
                Some((last, count)) if *last == direction => *count += 1,
                _ => runs.push((direction, 1)),
            }
        }
        runs
    }
}
