use bitvec::prelude::*;

use crate::algorithm::state::AutomatonState;
use crate::spatial::symbol::Symbol;

/// Exact loop detection over the controller's observable state
///
/// A run is a deterministic function of (grid, position, heading, beer mode,
/// priority order, hurdle). While the grid is unchanged, seeing the same
/// tuple twice proves the run will repeat forever. The visited set is a
/// bitset over every possible tuple and is cleared whenever beer mode
/// clears a cell.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    visited: BitVec,
    columns: usize,
    revision: usize,
}

impl CycleDetector {
    /// Headings x beer modes x priority orientations x hurdle kinds per cell
    const STATES_PER_CELL: usize = 4 * 2 * 2 * Symbol::KINDS;

    /// Create a detector for a grid of `lines` rows and `columns` columns
    pub fn new(lines: usize, columns: usize) -> Self {
        Self {
            visited: bitvec![0; lines * columns * Self::STATES_PER_CELL],
            columns,
            revision: 0,
        }
    }

    /// Record the current state and report whether it was seen before
    pub fn observe(&mut self, state: &AutomatonState) -> bool {
        if state.mutations != self.revision {
            self.visited.fill(false);
            self.revision = state.mutations;
        }

        let Some(key) = self.key(state) else {
            return false;
        };

        let seen = self.visited.get(key).as_deref() == Some(&true);
        self.visited.set(key, true);
        seen
    }

    /// Number of distinct states recorded since the last grid change
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    fn key(&self, state: &AutomatonState) -> Option<usize> {
        let cell = state.position.row * self.columns + state.position.col;
        let mut key = cell * 4 + state.heading.index();
        key = key * 2 + usize::from(state.beer.is_on());
        key = key * 2 + usize::from(state.priorities.is_inverted());
        key = key * Symbol::KINDS + state.hurdle.index();
        (key < self.visited.len()).then_some(key)
    }
}
