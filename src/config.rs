//! Runtime configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```yaml
//! csv:
//!   machine_column: Machine
//!   processing_time_column: TaskProcessingTime
//! chart:
//!   width: 1200
//!   label_threshold: 10.0
//!   iteration_width: 900
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Task file column layout.
    pub csv: CsvLayout,
    /// Chart appearance.
    pub chart: ChartConfig,
}

/// Column names of a task assignment file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvLayout {
    /// Machine identifier column.
    pub machine_column: String,
    /// Processing time column.
    pub processing_time_column: String,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            machine_column: "Machine".to_string(),
            processing_time_column: "TaskProcessingTime".to_string(),
        }
    }
}

/// Chart dimensions and labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Minimum chart width in pixels.
    pub width: u32,
    /// Extra width per machine in the load chart, in pixels.
    pub width_per_machine: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Task segments at or below this duration get no label.
    pub label_threshold: f64,
    /// Y axis upper limit as a multiple of the largest value.
    pub headroom: f64,
    /// Iterations chart width in pixels.
    pub iteration_width: u32,
    /// Iterations chart height in pixels.
    pub iteration_height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            width_per_machine: 50,
            height: 700,
            label_threshold: 10.0,
            headroom: 1.15,
            iteration_width: 900,
            iteration_height: 500,
        }
    }
}

impl ChartConfig {
    /// Load chart width for a number of machines.
    pub fn load_chart_width(&self, machines: usize) -> u32 {
        self.width
            .max(self.width_per_machine.saturating_mul(machines as u32))
    }
}

impl Config {
    /// Parses a YAML config.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Loads a YAML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
        Self::from_yaml(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
