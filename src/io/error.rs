//! Error types and context management for automaton runs

use std::fmt;
use std::path::PathBuf;

use crate::spatial::position::Position;
use crate::spatial::symbol::Symbol;

/// Main error type for all automaton operations
#[derive(Debug)]
pub enum AutomatonError {
    /// Map header dimensions outside the supported range
    InvalidDimensions {
        /// Requested number of rows
        lines: i64,
        /// Requested number of columns
        columns: i64,
    },

    /// Map text does not match its header
    MalformedMap {
        /// One-based map row, 0 when the problem is not tied to a row
        line: usize,
        /// Description of what's wrong with the map text
        reason: String,
    },

    /// Grid access outside the map
    OutOfBounds {
        /// Requested cell
        position: Position,
        /// Grid dimensions (lines, columns)
        dimensions: (usize, usize),
    },

    /// The map holds no `@` cell, so no step can be taken
    NoStartFound,

    /// A move reached the contour ring at a cell that is not `#`
    ///
    /// Occurs when:
    /// - The contour has a gap or holds another symbol
    /// - The automaton started on the ring and stepped outside the grid
    MapCorrupted {
        /// Cell the automaton tried to enter
        position: Position,
        /// Symbol found there, `None` when the cell lies outside the grid
        found: Option<Symbol>,
        /// Controller iteration when this occurred
        iteration: usize,
    },

    /// Every heading in the priority list is blocked
    BoxedIn {
        /// Cell the automaton is trapped in
        position: Position,
        /// Controller iteration when this occurred
        iteration: usize,
    },

    /// Run or shell parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl AutomatonError {
    /// Whether the error describes a broken map discovered during a run
    ///
    /// Such errors are reported next to the evaluated map instead of aborting
    /// a batch.
    pub const fn is_run_failure(&self) -> bool {
        matches!(self, Self::MapCorrupted { .. } | Self::BoxedIn { .. })
    }
}

impl AutomatonError {
    /// Whether the error rejects a map file before any run could start
    ///
    /// A batch records these against the offending file and moves on.
    pub const fn is_map_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::MalformedMap { .. }
        )
    }
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { lines, columns } => {
                write!(f, "Invalid map dimensions {lines}x{columns}")
            }
            Self::MalformedMap { line, reason } => {
                if *line == 0 {
                    write!(f, "Malformed map: {reason}")
                } else {
                    write!(f, "Malformed map at row {line}: {reason}")
                }
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell {position} is out of bounds (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::NoStartFound => write!(f, "Map doesn't contain a starting point"),
            Self::MapCorrupted {
                position,
                found,
                iteration,
            } => match found {
                Some(symbol) => write!(
                    f,
                    "Corrupted map: contour cell {position} holds {symbol} at iteration {iteration}"
                ),
                None => write!(
                    f,
                    "Corrupted map: cell {position} lies outside the grid at iteration {iteration}"
                ),
            },
            Self::BoxedIn {
                position,
                iteration,
            } => {
                write!(
                    f,
                    "Automaton is boxed in at {position}: no heading is passable (iteration {iteration})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AutomatonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for automaton results
pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current controller iteration
    pub iteration: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with run state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the iteration context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the iteration applied
    fn with_iteration(self, iteration: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AutomatonError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only run failures carry an iteration
            match &mut error {
                AutomatonError::MapCorrupted { iteration, .. }
                | AutomatonError::BoxedIn { iteration, .. } => {
                    if let Some(iter) = context.iteration {
                        *iteration = iter;
                    }
                }
                _ => {}
            }
            if let Some(operation) = context.operation {
                log::debug!("{operation} failed: {error}");
            }
            error
        })
    }

    fn with_iteration(self, iteration: usize) -> Result<T> {
        self.with_context(ErrorContext {
            iteration: Some(iteration),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AutomatonError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutomatonError {
    AutomatonError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn io_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AutomatonError {
    AutomatonError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
