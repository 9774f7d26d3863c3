//! Map text parsing
//!
//! A map source starts with the number of lines and the number of columns
//! (whitespace separated, on one line or two), followed by exactly that many
//! rows. Rows may be longer than the column count; the excess is ignored.

use std::io::Read;
use std::path::Path;

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{AutomatonError, Result, io_error};
use crate::spatial::grid::Grid;

/// Check header dimensions against the supported range
///
/// # Errors
///
/// Returns `InvalidDimensions` if either value lies outside
/// `MIN_DIMENSION..=MAX_DIMENSION`
pub fn validate_dimensions(lines: i64, columns: i64) -> Result<(usize, usize)> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if range.contains(&lines) && range.contains(&columns) {
        Ok((lines as usize, columns as usize))
    } else {
        Err(AutomatonError::InvalidDimensions { lines, columns })
    }
}

/// Parse a map with its dimension header
///
/// # Errors
///
/// Returns:
/// - `MalformedMap` if the header is missing or not numeric, or rows are missing or short
/// - `InvalidDimensions` if the header values are out of range
pub fn parse_map(text: &str) -> Result<Grid> {
    let mut source_lines = text.lines().map(|line| line.trim_end_matches('\r'));

    let mut header = Vec::with_capacity(2);
    while header.len() < 2 {
        let Some(line) = source_lines.next() else {
            return Err(AutomatonError::MalformedMap {
                line: 0,
                reason: "missing line and column counts".to_string(),
            });
        };

        for token in line.split_whitespace() {
            if header.len() == 2 {
                return Err(AutomatonError::MalformedMap {
                    line: 0,
                    reason: format!("unexpected header token '{token}'"),
                });
            }
            let value = token
                .parse::<i64>()
                .map_err(|e| AutomatonError::MalformedMap {
                    line: 0,
                    reason: format!("invalid dimension '{token}': {e}"),
                })?;
            header.push(value);
        }
    }

    let (lines, columns) = match header.as_slice() {
        [lines, columns] => validate_dimensions(*lines, *columns)?,
        _ => {
            return Err(AutomatonError::MalformedMap {
                line: 0,
                reason: "missing line and column counts".to_string(),
            });
        }
    };

    let rows: Vec<&str> = source_lines.take(lines).collect();
    if rows.len() < lines {
        return Err(AutomatonError::MalformedMap {
            line: rows.len() + 1,
            reason: format!("expected {lines} rows, found {}", rows.len()),
        });
    }

    Grid::from_rows_with_columns(&rows, columns)
}

/// Read and parse a map file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise as [`parse_map`]
pub fn read_map_file(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, "read", e))?;
    parse_map(&text)
}

/// Read and parse a map from any reader, such as standard input
///
/// # Errors
///
/// Returns `FileSystem` if reading fails, otherwise as [`parse_map`]
pub fn read_map<R: Read>(mut reader: R) -> Result<Grid> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| io_error("<stdin>", "read", e))?;
    parse_map(&text)
}
