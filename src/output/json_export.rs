//! JSON export functionality

use crate::error::{ChartError, Result};
use crate::table::ResultsTable;
use serde_json::json;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Export the parsed table to a JSON file
    pub fn export(table: &ResultsTable, path: &Path) -> Result<()> {
        let output = json!({
            "headers": table.headers,
            "results": table.results,
            "summary": {
                "engines": table.results.len(),
                "lowest": extreme(table, Ordering::Less),
                "highest": extreme(table, Ordering::Greater),
            },
        });

        let file = File::create(path).map_err(|e| ChartError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &output)?;
        writer.flush().map_err(|e| ChartError::io(path, e))?;

        tracing::debug!("Exported {} result(s) to {}", table.results.len(), path.display());
        Ok(())
    }
}

/// Engine whose finite measurement compares as `wanted` against all others.
/// Ties keep the earliest engine.
fn extreme(table: &ResultsTable, wanted: Ordering) -> Option<&str> {
    table
        .results
        .iter()
        .filter(|(_, value)| value.is_finite())
        .reduce(|best, next| {
            if next.1.total_cmp(&best.1) == wanted {
                next
            } else {
                best
            }
        })
        .map(|(engine, _)| engine)
}
