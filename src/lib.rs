//! Deterministic simulation of an automaton walking a character-grid map
//!
//! The automaton starts on `@`, heads South and advances one cell per step.
//! Push cells force a heading, obstacles are routed around using a ranked
//! list of headings, beer mode lets it break through internal walls, an
//! inverter reverses the ranking and teleporters relocate it. A run ends when
//! the goal `$` is reached or the automaton is judged to be looping.

#![forbid(unsafe_code)]

/// Navigation engine: state machine, step function and obstacle handling
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Map grid, coordinates, headings and symbols
pub mod spatial;

pub use algorithm::executor::{Automaton, RunConfig, RunOutcome};
pub use io::error::{AutomatonError, Result};
