//! Results table extraction
//!
//! Benchmark reports print their results as a pipe-delimited table after a
//! `Results:` line:
//!
//! ```text
//! Results:
//! | Engine | Score |
//! |--------|-------|
//! | EngineA | 123.45 |
//! | EngineB | 98.76 |
//! ```
//!
//! Parsing is lenient: rows whose cell count differs from the header, or whose
//! measurement is not a number, are skipped rather than rejected.

pub mod mapping;

pub use mapping::{ResultEntry, ResultsMapping};

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Marker that starts the parseable region of a report
pub const RESULTS_MARKER: &str = "Results:";

/// Column delimiter
pub const DELIMITER: char = '|';

/// Prefix of the header/body separator line
const SEPARATOR_PREFIX: &str = "|---";

/// Parsed results table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsTable {
    /// Header row cells
    pub headers: Vec<String>,
    /// Engine → measurement
    pub results: ResultsMapping,
}

/// Read a report from disk and parse its results table
pub fn parse_results_file(path: &Path) -> Result<ResultsTable> {
    let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    parse_results(&content)
}

/// Parse the results table that follows the `Results:` marker
pub fn parse_results(message: &str) -> Result<ResultsTable> {
    let start = message.find(RESULTS_MARKER).ok_or(ChartError::NotFound)?;
    let section = message[start..].trim();

    let data_lines: Vec<&str> = section
        .lines()
        .filter(|line| line.contains(DELIMITER) && !line.starts_with(SEPARATOR_PREFIX))
        .collect();

    if data_lines.len() < 2 {
        return Err(ChartError::Format(
            "Unable to parse header or data rows.".to_string(),
        ));
    }

    let headers = split_row(data_lines[0]);
    if headers.len() < 2 {
        return Err(ChartError::Format(format!(
            "expected an engine and a measurement column, found {} header column(s)",
            headers.len()
        )));
    }

    let mut results = ResultsMapping::new();
    for row in &data_lines[1..] {
        let cells = split_row(row);
        if cells.len() != headers.len() {
            tracing::debug!(
                "Skipping row with {} cells (expected {}): {}",
                cells.len(),
                headers.len(),
                row
            );
            continue;
        }

        let engine = &cells[0];
        match parse_measurement(&cells[1]) {
            Some(value) => {
                if let Some(previous) = results.insert(engine.as_str(), value) {
                    tracing::debug!("Engine {} repeated, replacing {} with {}", engine, previous, value);
                }
            }
            None => {
                tracing::debug!("Skipping row for {}: non-numeric value {:?}", engine, cells[1]);
            }
        }
    }

    tracing::info!("Parsed {} result(s) from table", results.len());

    Ok(ResultsTable { headers, results })
}

/// Parse a measurement cell as `f64`.
///
/// Single underscores between digits are accepted as digit separators
/// (`1_000.5`); any other underscore makes the cell non-numeric.
pub fn parse_measurement(cell: &str) -> Option<f64> {
    if !cell.contains('_') {
        return cell.parse().ok();
    }

    let bytes = cell.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(idx, &b)| {
        b != b'_'
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }

    cell.replace('_', "").parse().ok()
}

/// Split a table line into trimmed cells.
///
/// The pieces before the first and after the last delimiter are boundary
/// artifacts and are dropped, so `"| a | b |"` yields `["a", "b"]`.
pub fn split_row(line: &str) -> Vec<String> {
    let pieces: Vec<&str> = line.split(DELIMITER).collect();
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
