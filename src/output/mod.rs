//! Output formats for parsed results

pub mod json_export;

pub use json_export::JsonExporter;
