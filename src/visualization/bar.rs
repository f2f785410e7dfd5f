//! Bar chart comparing engines by a single measurement

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::table::ResultsMapping;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// Bar fill
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Bar width as a fraction of the slot each engine occupies
const BAR_WIDTH: f64 = 0.8;

/// Vertical headroom so annotations stay inside the plot
const HEADROOM: f64 = 1.1;

pub struct BarChartPlotter;

impl BarChartPlotter {
    /// Plot results with the default chart settings
    pub fn plot(results: &ResultsMapping, path: &Path) -> Result<PathBuf> {
        Self::plot_with_config(results, path, &ChartConfig::default())
    }

    /// Plot one bar per engine, in mapping order, annotated with its value.
    ///
    /// `.svg` paths are written with the SVG backend, everything else with the
    /// bitmap backend (encoding picked from the extension). A path without an
    /// extension gets `.png` appended. An existing file is overwritten.
    ///
    /// Returns the path actually written.
    pub fn plot_with_config(
        results: &ResultsMapping,
        path: &Path,
        config: &ChartConfig,
    ) -> Result<PathBuf> {
        config.validate()?;
        let size = (config.width, config.height);
        let path = output_path(path);

        if is_svg(&path) {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            draw(&root, results, config).map_err(render_error)?;
        } else {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            draw(&root, results, config).map_err(render_error)?;
        }

        tracing::info!(
            "Rendered {} bar(s) to {} ({}x{})",
            results.len(),
            path.display(),
            config.width,
            config.height
        );
        Ok(path)
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    results: &ResultsMapping,
    config: &ChartConfig,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let engines: Vec<&str> = results.engines().collect();
    let slots = engines.len().max(1);
    let (y_min, y_max) = value_range(results.values());

    let mut chart = ChartBuilder::on(root)
        .caption(
            &config.title,
            ("sans-serif", 32).into_font().style(FontStyle::Bold),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|x| engine_label(&engines, *x))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .draw()?;

    let bars: Vec<(f64, f64)> = results
        .values()
        .enumerate()
        .filter(|(_, value)| value.is_finite())
        .map(|(idx, value)| (idx as f64, value))
        .collect();

    // Draw bars
    chart.draw_series(bars.iter().map(|&(x, value)| {
        let (low, high) = if value >= 0.0 { (0.0, value) } else { (value, 0.0) };
        Rectangle::new(
            [(x - BAR_WIDTH / 2.0, high), (x + BAR_WIDTH / 2.0, low)],
            BAR_COLOR.filled(),
        )
    }))?;

    // Value annotations, centered on the bar top
    let annotation_style =
        TextStyle::from(("sans-serif", 16).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(
        bars.iter()
            .map(|&(x, value)| Text::new(format!("{:.2}", value), (x, value), annotation_style.clone())),
    )?;

    root.present()?;
    Ok(())
}

/// Default to PNG when the path carries no extension
fn output_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => path.with_extension("png"),
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Y-axis span: always includes zero, finite values only, with headroom
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let (low, high) = (min * HEADROOM, max * HEADROOM);
    if high - low <= f64::EPSILON {
        (0.0, 1.0)
    } else {
        (low, high)
    }
}

/// Engine name for an x-axis key point; bars sit on integer positions
fn engine_label(engines: &[&str], x: f64) -> String {
    let slot = x.round();
    if slot < 0.0 || (x - slot).abs() > 1e-6 {
        return String::new();
    }
    engines
        .get(slot as usize)
        .map(|name| name.to_string())
        .unwrap_or_default()
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Render(err.to_string())
}
