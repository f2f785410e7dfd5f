//! benchmark-chart - bar charts from benchmark reports
//!
//! Parses the pipe-delimited results table that follows a `Results:` line in a
//! benchmark report and renders it as a bar chart, one bar per engine.
//!
//! # Architecture
//!
//! - **Table**: locates and parses the results table
//! - **Visualization**: renders the engine → value mapping with plotters
//! - **Config**: chart title, axis labels and canvas size
//! - **Output**: optional JSON export of the parsed table
//! - **CLI**: argument handling for the `benchmark-chart` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use benchmark_chart::table::parse_results;
//! use benchmark_chart::visualization::BarChartPlotter;
//! use std::path::Path;
//!
//! fn main() -> benchmark_chart::Result<()> {
//!     let report = "Results:\n| Engine | Score |\n|---|---|\n| wasmi | 12.5 |\n";
//!     let table = parse_results(report)?;
//!     BarChartPlotter::plot(&table.results, Path::new("chart.png"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod table;
pub mod visualization;

// Re-export commonly used types
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use output::JsonExporter;
pub use table::{parse_results, parse_results_file, ResultsMapping, ResultsTable};
pub use visualization::BarChartPlotter;
