//! Visualization and plotting

pub mod bar;

pub use bar::BarChartPlotter;
