//! Character map storage with bounded access and symbol search
//!
//! The map is held as a dense `lines x columns` array of decoded symbols.
//! Every accessor is bounds-checked and reports `OutOfBounds` instead of
//! panicking, so the navigation engine can run over untrusted input.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{AutomatonError, Result};
use crate::spatial::position::Position;
use crate::spatial::symbol::Symbol;

/// Rectangular map of cell symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Symbol>,
}

impl Grid {
    /// Create a grid of the given size filled with `fill`
    pub fn filled(lines: usize, columns: usize, fill: Symbol) -> Self {
        Self {
            cells: Array2::from_elem((lines, columns), fill),
        }
    }

    /// Build a grid from text rows, taking the column count from the first row
    ///
    /// # Errors
    ///
    /// Returns `MalformedMap` if there are no rows, the first row is empty, or
    /// a later row is shorter than the first
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let columns = rows
            .first()
            .map_or(0, |row| row.as_ref().chars().count());
        Self::from_rows_with_columns(rows, columns)
    }

    /// Build a grid from text rows holding at least `columns` characters each
    ///
    /// Characters past `columns` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMap` if there are no rows, `columns` is zero, or a
    /// row is shorter than `columns`
    pub fn from_rows_with_columns<S: AsRef<str>>(rows: &[S], columns: usize) -> Result<Self> {
        if rows.is_empty() || columns == 0 {
            return Err(AutomatonError::MalformedMap {
                line: 0,
                reason: "map must contain at least one row and one column".to_string(),
            });
        }

        let mut symbols = Vec::with_capacity(rows.len() * columns);
        for (line, row) in rows.iter().enumerate() {
            let before = symbols.len();
            symbols.extend(row.as_ref().chars().take(columns).map(Symbol::from_char));
            let found = symbols.len() - before;
            if found < columns {
                return Err(AutomatonError::MalformedMap {
                    line: line + 1,
                    reason: format!("row has {found} characters, expected {columns}"),
                });
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), columns), symbols).map_err(|e| {
            AutomatonError::MalformedMap {
                line: 0,
                reason: e.to_string(),
            }
        })?;

        Ok(Self { cells })
    }

    /// Number of rows
    pub fn lines(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (lines, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Read the symbol at `row`, `col`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn get(&self, row: usize, col: usize) -> Result<Symbol> {
        self.cells
            .get([row, col])
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Read the symbol at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn at(&self, position: Position) -> Result<Symbol> {
        self.get(position.row, position.col)
    }

    /// Overwrite the symbol at `row`, `col`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<()> {
        let error = self.out_of_bounds(row, col);
        let cell = self.cells.get_mut([row, col]).ok_or(error)?;
        *cell = symbol;
        Ok(())
    }

    /// First cell holding `symbol`, scanning rows top to bottom and each row left to right
    pub fn find_first(&self, symbol: Symbol) -> Option<Position> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| **cell == symbol)
            .map(|((row, col), _)| Position::new(row, col))
    }

    /// First cell holding `symbol` that shares neither row nor column with `exclude`
    ///
    /// Used to locate the partner of a teleporter. A partner on the same row
    /// or the same column as `exclude` is never returned.
    pub fn find_second(&self, symbol: Symbol, exclude: Position) -> Option<Position> {
        self.cells
            .indexed_iter()
            .find(|((row, col), cell)| {
                **cell == symbol && *row != exclude.row && *col != exclude.col
            })
            .map(|((row, col), _)| Position::new(row, col))
    }

    /// Number of cells holding `symbol`
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|cell| **cell == symbol).count()
    }

    /// Whether `position` lies strictly inside the contour ring
    pub fn is_interior(&self, position: Position) -> bool {
        let (lines, columns) = self.dimensions();
        (1..lines.saturating_sub(1)).contains(&position.row)
            && (1..columns.saturating_sub(1)).contains(&position.col)
    }

    /// Render every row as a string of map characters
    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|symbol| symbol.as_char()).collect())
            .collect()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> AutomatonError {
        AutomatonError::OutOfBounds {
            position: Position::new(row, col),
            dimensions: self.dimensions(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
