//! End-to-end tests for the benchmark-chart binary

use std::path::Path;
use std::process::{Command, Output};

const REPORT: &str = "\
Running Coremark tests... [should take 12..20 seconds per engine]

Results:

| Engine     | Result(ms)         |
|------------|--------------------|
| wasmi      | 1520.33            |
| wasmtime   | 18430.10           |
| wasm3      | 2780.95            |
";

fn run(args: &[&str]) -> Output {
    Command::new(assert_cmd::cargo::cargo_bin!("benchmark-chart"))
        .args(args)
        .output()
        .expect("failed to run benchmark-chart")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

#[test]
fn renders_chart_from_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("chart.png");
    std::fs::write(&input, REPORT).unwrap();

    let result = run(&[path_str(&input), path_str(&output)]);

    assert!(result.status.success());
    assert!(output.exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Chart saved as"));
}

#[test]
fn one_argument_prints_usage() {
    let result = run(&["report.txt"]);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Usage: benchmark-chart <input_file> <output_file>"));
}

#[test]
fn three_arguments_print_usage() {
    let result = run(&["report.txt", "chart.png", "extra"]);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn missing_marker_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("chart.png");
    std::fs::write(&input, "| Engine | Score |\n| a | 1 |\n").unwrap();

    let result = run(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("Error: "));
    assert!(stdout.contains("No 'Results:' section found"));
    assert!(!output.exists());
}

#[test]
fn header_only_table_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("chart.png");
    std::fs::write(&input, "Results:\n| Engine | Score |\n|---|---|\n").unwrap();

    let result = run(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Error: "));
    assert!(stdout.contains("Invalid table format"));
}

#[test]
fn missing_input_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("chart.png");

    let result = run(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("Error: "));
}

#[test]
fn json_export_and_svg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("chart.svg");
    let json = dir.path().join("results.json");
    std::fs::write(&input, REPORT).unwrap();

    let result = run(&[
        path_str(&input),
        path_str(&output),
        "--json",
        path_str(&json),
        "--title",
        "Nightly Coremark",
    ]);

    assert!(result.status.success());
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Nightly Coremark"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(exported["headers"][1], "Result(ms)");
    assert_eq!(exported["results"][2]["engine"], "wasm3");
    assert_eq!(exported["summary"]["engines"], 3);
}

#[test]
fn help_exits_successfully() {
    let result = run(&["--help"]);
    assert!(result.status.success());
}

#[test]
fn config_file_applies_and_flags_override_it() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let config = dir.path().join("chart.json");
    let output = dir.path().join("chart.svg");
    std::fs::write(&input, REPORT).unwrap();
    std::fs::write(
        &config,
        r#"{ "title": "Title From File", "y_label": "Score (pts)", "width": 900 }"#,
    )
    .unwrap();

    let result = run(&[
        path_str(&input),
        path_str(&output),
        "--config",
        path_str(&config),
        "--title",
        "Title From Flag",
    ]);

    assert!(result.status.success());
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Title From Flag"));
    assert!(!svg.contains("Title From File"));
    assert!(svg.contains("Score (pts)"));
    assert!(svg.contains(r#"width="900""#));
}

#[test]
fn invalid_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let config = dir.path().join("chart.json");
    let output = dir.path().join("chart.png");
    std::fs::write(&input, REPORT).unwrap();
    std::fs::write(&config, r#"{ "height": 5 }"#).unwrap();

    let result = run(&[
        path_str(&input),
        path_str(&output),
        "--config",
        path_str(&config),
    ]);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("Error: "));
    assert!(stdout.contains("Failed to load chart config"));
    assert!(!output.exists());
}

#[test]
fn output_without_extension_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("chart");
    std::fs::write(&input, REPORT).unwrap();

    let result = run(&[path_str(&input), path_str(&output)]);

    assert!(result.status.success());
    assert!(dir.path().join("chart.png").exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("chart.png"));
}
