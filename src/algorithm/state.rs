//! Per-run automaton state shared by the navigation step and the hurdle handlers

use crate::algorithm::history::RunHistory;
use crate::algorithm::priority::PriorityList;
use crate::spatial::grid::Grid;
use crate::spatial::position::{Direction, Position};
use crate::spatial::symbol::Symbol;

/// Whether the automaton can break through internal obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BeerMode {
    /// Internal obstacles block movement
    #[default]
    Off,
    /// Internal obstacles are entered and cleared
    On,
}

impl BeerMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Whether beer mode is active
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Everything one run mutates
///
/// Owned exclusively by one controller, so independent runs never observe
/// each other's priority order or history.
#[derive(Debug, Clone)]
pub struct AutomatonState {
    /// Map being traversed, mutated when beer mode clears an obstacle
    pub grid: Grid,
    /// Current cell
    pub position: Position,
    /// Heading used for the next plain step
    pub heading: Direction,
    /// Obstacle phasing mode
    pub beer: BeerMode,
    /// Symbol that selects the handler for the next iteration
    pub hurdle: Symbol,
    /// Probing order for obstacle resolution
    pub priorities: PriorityList,
    /// Committed moves
    pub history: RunHistory,
    /// Number of grid cells cleared so far
    pub mutations: usize,
}

impl AutomatonState {
    /// Place a fresh automaton at `position` heading South with beer mode off
    pub fn new(grid: Grid, position: Position, history_ceiling: usize) -> Self {
        Self {
            grid,
            position,
            heading: Direction::South,
            beer: BeerMode::Off,
            hurdle: Symbol::Start,
            priorities: PriorityList::new(),
            history: RunHistory::new(history_ceiling),
            mutations: 0,
        }
    }
}
