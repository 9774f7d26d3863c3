//! Spatial data structures for the automaton map
//!
//! This module contains spatial-related functionality including:
//! - Grid storage, bounded access and symbol search
//! - Positions and compass headings
//! - The cell symbol alphabet
//! - Seeded random map generation

/// Seeded random map generation
pub mod generator;
/// Grid storage and symbol search
pub mod grid;
/// Cell coordinates and headings
pub mod position;
/// Map cell alphabet
pub mod symbol;

pub use grid::Grid;
pub use position::{Direction, Position};
pub use symbol::Symbol;
