//! Obstacle resolution by beer-mode phasing or priority probing

use crate::algorithm::navigation::navigate;
use crate::algorithm::state::AutomatonState;
use crate::io::error::{AutomatonError, Result};
use crate::spatial::position::Direction;
use crate::spatial::symbol::Symbol;

/// How an obstacle encounter was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The internal obstacle under the automaton was cleared and a step in the
    /// current heading attempted
    PhasedThrough {
        /// Whether the follow-up step moved
        moved: bool,
    },
    /// The first passable heading in priority order was taken
    Rerouted(Direction),
}

/// Handle an `X` or `#` hurdle
///
/// In beer mode the automaton already stands on the internal obstacle it
/// entered; that cell becomes a space and the automaton keeps its heading.
/// Otherwise each heading of the priority list is tried in turn and the first
/// one that moves becomes the new heading.
///
/// # Errors
///
/// Returns:
/// - `BoxedIn` if no heading in the priority list can be taken
/// - `MapCorrupted` if a probe reaches a broken contour
pub fn resolve_obstacle(state: &mut AutomatonState) -> Result<Resolution> {
    let position = state.position;

    if state.hurdle == Symbol::InternalObstacle
        && state.beer.is_on()
        && state.grid.at(position)? == Symbol::InternalObstacle
    {
        state.grid.set(position.row, position.col, Symbol::Space)?;
        state.mutations += 1;
        log::debug!("Cleared internal obstacle at {position}");

        let heading = state.heading;
        let moved = navigate(state, heading)?;
        return Ok(Resolution::PhasedThrough { moved });
    }

    let priorities = state.priorities;
    for direction in priorities.iter() {
        if navigate(state, direction)? {
            log::debug!("Rerouted {direction} around {position} using {priorities}");
            state.heading = direction;
            return Ok(Resolution::Rerouted(direction));
        }
    }

    Err(AutomatonError::BoxedIn {
        position,
        iteration: 0,
    })
}
