//! Configuration types for the snapshot pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for CSV emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Decimal precision for the summary columns
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_delimiter() -> char {
    ','
}

fn default_precision() -> usize {
    2
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            precision: default_precision(),
        }
    }
}

/// Configuration for chart rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in pixels
    #[serde(default = "default_chart_size")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_chart_size")]
    pub height: u32,

    /// Chart title
    #[serde(default = "default_chart_title")]
    pub title: String,
}

fn default_chart_size() -> u32 {
    800
}

fn default_chart_title() -> String {
    "Sensor Snapshot".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_size(),
            height: default_chart_size(),
            title: default_chart_title(),
        }
    }
}

/// Main pipeline configuration combining all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub csv: CsvConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

impl PipelineConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
