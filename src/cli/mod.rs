//! CLI argument parsing and command handling

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::output::JsonExporter;
use crate::table::parse_results_file;
use crate::visualization::BarChartPlotter;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Printed on any argument error
pub const USAGE: &str = "Usage: benchmark-chart <input_file> <output_file>";

/// Render a bar chart from the results table of a benchmark report
#[derive(Parser, Debug)]
#[command(name = "benchmark-chart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report file containing a "Results:" table
    pub input_file: PathBuf,

    /// Chart image to write (.png, .jpg, .bmp or .svg)
    pub output_file: PathBuf,

    /// JSON file with chart settings (title, x_label, y_label, width, height)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Y-axis label (measurement unit)
    #[arg(long)]
    pub y_label: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Also export the parsed table to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments, mapping every argument error to [`ChartError::Usage`].
    ///
    /// `--help` and `--version` print and exit the process like `Cli::parse`.
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, ChartError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => ChartError::Usage(USAGE.to_string()),
        })
    }

    /// Parse the report and render the chart
    pub fn run(&self) -> Result<()> {
        tracing::info!("Input: {}", self.input_file.display());
        tracing::info!("Output: {}", self.output_file.display());

        let config = self.chart_config()?;

        let table = parse_results_file(&self.input_file).with_context(|| {
            format!("Failed to parse results from: {}", self.input_file.display())
        })?;

        if table.results.is_empty() {
            tracing::warn!("No numeric rows found, the chart will have no bars");
        }

        if let Some(ref path) = self.json {
            JsonExporter::export(&table, path)
                .with_context(|| format!("Failed to export JSON to: {}", path.display()))?;
            println!("Results exported to {}", path.display());
        }

        let written = BarChartPlotter::plot_with_config(&table.results, &self.output_file, &config)
            .with_context(|| format!("Failed to render chart: {}", self.output_file.display()))?;
        println!("Chart saved as {}", written.display());

        Ok(())
    }

    /// Config file (or defaults) with flag overrides applied
    fn chart_config(&self) -> Result<ChartConfig> {
        let mut config = match self.config {
            Some(ref path) => ChartConfig::from_file(path)
                .with_context(|| format!("Failed to load chart config from: {}", path.display()))?,
            None => ChartConfig::default(),
        };

        if let Some(ref title) = self.title {
            config = config.with_title(title.clone());
        }
        if let Some(ref label) = self.y_label {
            config = config.with_y_label(label.clone());
        }
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.width);
            let height = self.height.unwrap_or(config.height);
            config = config.with_size(width, height);
        }

        config.validate()?;
        tracing::debug!("Chart config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_args(["benchmark-chart", "in.txt", "out.png"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.txt"));
        assert_eq!(cli.output_file, PathBuf::from("out.png"));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_wrong_positional_count_is_usage_error() {
        for args in [
            vec!["benchmark-chart"],
            vec!["benchmark-chart", "in.txt"],
            vec!["benchmark-chart", "in.txt", "out.png", "extra"],
        ] {
            let err = Cli::try_parse_args(args).unwrap_err();
            assert!(matches!(err, ChartError::Usage(_)));
            assert_eq!(err.to_string(), USAGE);
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_args([
            "benchmark-chart",
            "in.txt",
            "out.png",
            "--title",
            "Nightly",
            "--width",
            "640",
        ])
        .unwrap();

        let config = cli.chart_config().unwrap();
        assert_eq!(config.title, "Nightly");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 800);
        assert_eq!(config.y_label, "Result (ms)");
    }

    #[test]
    fn test_invalid_size_flag_rejected() {
        let cli =
            Cli::try_parse_args(["benchmark-chart", "in.txt", "out.png", "--height", "5"]).unwrap();
        assert!(cli.chart_config().is_err());
    }

    #[test]
    fn test_run_missing_marker() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.txt");
        std::fs::write(&input, "no table here\n").unwrap();

        let cli = Cli::try_parse_args([
            "benchmark-chart".into(),
            input.into_os_string(),
            dir.path().join("chart.png").into_os_string(),
        ])
        .unwrap();

        let err = cli.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChartError>(),
            Some(ChartError::NotFound)
        ));
    }
}
