//! Handlers for the beer toggle, priority inverter and teleporter cells
//!
//! None of these move the automaton along its heading; the controller follows
//! each of them with a regular navigation step.

use crate::algorithm::state::{AutomatonState, BeerMode};
use crate::spatial::position::Position;
use crate::spatial::symbol::Symbol;

/// Flip beer mode and return the new mode
pub fn toggle_beer(state: &mut AutomatonState) -> BeerMode {
    state.beer = state.beer.toggled();
    log::debug!("Beer mode {:?} at {}", state.beer, state.position);
    state.beer
}

/// Reverse the obstacle priority order
pub fn invert_priorities(state: &mut AutomatonState) {
    state.priorities.invert();
    log::debug!("Priorities now {} at {}", state.priorities, state.position);
}

/// Jump to the partner teleporter
///
/// The partner is the first `T` sharing neither row nor column with the
/// current cell. Heading and history are untouched. Returns the new position,
/// or `None` when no partner qualifies and the automaton stays put.
pub fn teleport(state: &mut AutomatonState) -> Option<Position> {
    let partner = state.grid.find_second(Symbol::Teleporter, state.position);
    match partner {
        Some(target) => {
            log::debug!("Teleported from {} to {target}", state.position);
            state.position = target;
        }
        None => log::warn!("No partner teleporter for {}", state.position),
    }
    partner
}
