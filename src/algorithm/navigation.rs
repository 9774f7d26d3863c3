//! Single-cell navigation step
//!
//! A step offsets the automaton by one cell, classifies the destination and
//! either commits the move or reports the blocking hurdle. Only committed
//! moves reach the run history.

use crate::algorithm::state::AutomatonState;
use crate::io::error::{AutomatonError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::position::{Direction, Position};
use crate::spatial::symbol::Symbol;

/// What a tentative destination turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Cell strictly inside the contour ring holding the given symbol
    Interior(Symbol),
    /// Contour ring cell holding `#`
    Contour,
    /// Contour ring cell holding anything else, or a cell outside the grid
    Corrupted(Option<Symbol>),
}

/// Classify the cell at `position`
pub fn classify(grid: &Grid, position: Position) -> Destination {
    let symbol = grid.at(position).ok();
    match symbol {
        Some(symbol) if grid.is_interior(position) => Destination::Interior(symbol),
        Some(Symbol::ContourObstacle) => Destination::Contour,
        found => Destination::Corrupted(found),
    }
}

/// Attempt one step in `direction`
///
/// Returns `Ok(true)` when the automaton moved. On a blocked step the
/// position is unchanged and `state.hurdle` names the obstacle. Contour cells
/// are never entered, regardless of beer mode.
///
/// # Errors
///
/// Returns `MapCorrupted` if the destination lies on the contour ring but is
/// not `#`, or lies outside the grid
pub fn navigate(state: &mut AutomatonState, direction: Direction) -> Result<bool> {
    let destination = state.position.offset(direction);

    match classify(&state.grid, destination) {
        Destination::Interior(Symbol::InternalObstacle) if !state.beer.is_on() => {
            log::trace!("{direction} blocked by internal obstacle at {destination}");
            state.hurdle = Symbol::InternalObstacle;
            Ok(false)
        }
        Destination::Interior(symbol) => {
            log::trace!("{direction} to {destination} onto {symbol}");
            state.position = destination;
            state.hurdle = symbol;
            state.history.record(direction);
            Ok(true)
        }
        Destination::Contour => {
            log::trace!("{direction} blocked by contour at {destination}");
            state.hurdle = Symbol::ContourObstacle;
            Ok(false)
        }
        Destination::Corrupted(found) => Err(AutomatonError::MapCorrupted {
            position: destination,
            found,
            iteration: 0,
        }),
    }
}
