//! Error types for benchmark-chart

use std::path::PathBuf;
use thiserror::Error;

/// Chart tool error type
#[derive(Error, Debug)]
pub enum ChartError {
    /// Wrong command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The report has no `Results:` marker
    #[error("No 'Results:' section found in the input message.")]
    NotFound,

    /// The results table is missing its header or data rows
    #[error("Invalid table format: {0}")]
    Format(String),

    /// Chart configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Plotting backend failure
    #[error("render error: {0}")]
    Render(String),

    /// IO error on a named file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ChartError>;
