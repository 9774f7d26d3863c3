//! Seeded random map generation for batch experiments and benchmarks

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::position::{Direction, Position};
use crate::spatial::symbol::Symbol;

/// Relative frequency of special cells among non-obstacle interior cells
const SPECIAL_CELL_RATE: f64 = 0.04;

/// Produces contour-bounded maps with one start, one stop and scattered features
///
/// Identical seeds always produce identical maps.
pub struct MapGenerator {
    rng: StdRng,
    obstacle_density: f64,
    teleporters: bool,
}

impl MapGenerator {
    /// Create a generator with the given seed and internal obstacle density
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `obstacle_density` is outside `[0, 1)`
    pub fn new(seed: u64, obstacle_density: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&obstacle_density) {
            return Err(invalid_parameter(
                "density",
                &obstacle_density,
                &"must lie in [0, 1)",
            ));
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            obstacle_density,
            teleporters: true,
        })
    }

    /// Enable or disable placement of a teleporter pair
    #[must_use]
    pub const fn with_teleporters(mut self, teleporters: bool) -> Self {
        self.teleporters = teleporters;
        self
    }

    /// Generate a map of `lines` rows and `columns` columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the interior is too small to hold the
    /// start, stop and teleporter cells
    pub fn generate(&mut self, lines: usize, columns: usize) -> Result<Grid> {
        let interior = lines.saturating_sub(2) * columns.saturating_sub(2);
        let reserved = if self.teleporters { 4 } else { 2 };
        if interior < reserved {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{lines}x{columns}"),
                &format!("interior must hold at least {reserved} cells"),
            ));
        }

        let mut grid = Grid::filled(lines, columns, Symbol::ContourObstacle);

        for row in 1..lines - 1 {
            for col in 1..columns - 1 {
                let symbol = self.random_interior_symbol();
                grid.set(row, col, symbol)?;
            }
        }

        let start = self.random_interior(lines, columns);
        grid.set(start.row, start.col, Symbol::Start)?;

        let stop = self.distinct_interior(lines, columns, &[start]);
        grid.set(stop.row, stop.col, Symbol::Stop)?;

        if self.teleporters {
            let first = self.distinct_interior(lines, columns, &[start, stop]);
            let second = self.distinct_interior(lines, columns, &[start, stop, first]);
            grid.set(first.row, first.col, Symbol::Teleporter)?;
            grid.set(second.row, second.col, Symbol::Teleporter)?;
        }

        Ok(grid)
    }

    fn random_interior_symbol(&mut self) -> Symbol {
        if self.rng.random::<f64>() < self.obstacle_density {
            return Symbol::InternalObstacle;
        }

        if self.rng.random::<f64>() >= SPECIAL_CELL_RATE {
            return Symbol::Space;
        }

        match self.rng.random_range(0..6) {
            0 => Symbol::BeerToggle,
            1 => Symbol::Inverter,
            kind => {
                let direction = Direction::ALL
                    .get(kind - 2)
                    .copied()
                    .unwrap_or(Direction::South);
                Symbol::Push(direction)
            }
        }
    }

    fn random_interior(&mut self, lines: usize, columns: usize) -> Position {
        Position::new(
            self.rng.random_range(1..lines - 1),
            self.rng.random_range(1..columns - 1),
        )
    }

    fn distinct_interior(&mut self, lines: usize, columns: usize, taken: &[Position]) -> Position {
        loop {
            let candidate = self.random_interior(lines, columns);
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}
