//! Chart configuration

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smallest canvas edge accepted, in pixels
pub const MIN_DIMENSION: u32 = 100;

/// Chart appearance settings
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart caption
    pub title: String,

    /// X-axis description
    pub x_label: String,

    /// Y-axis description (the measurement unit)
    pub y_label: String,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Coremark Benchmark Results".to_string(),
            x_label: "Engine".to_string(),
            y_label: "Result (ms)".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

impl ChartConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ChartError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the chart title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the y-axis description
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ChartError::Config("title must not be empty".into()));
        }

        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ChartError::Config(format!(
                "canvas must be at least {}x{} pixels, got {}x{}",
                MIN_DIMENSION, MIN_DIMENSION, self.width, self.height
            )));
        }

        Ok(())
    }
}
