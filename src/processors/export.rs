//! Single-file export to CSV and a rendered chart.
//!
//! Loads one dataset file and feeds the same in-memory readings to the
//! summary CSV writer and the chart renderer.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::PipelineConfig;
use crate::core::loaders::load_dataset;
use crate::core::writers::write_summary_csv;
use crate::visualization::render_chart;

/// Outcome of an export run, for the CLI summary.
#[derive(Debug)]
pub struct ExportReport {
    /// Number of readings exported.
    pub records: usize,
}

/// Export a dataset file to a summary CSV and a line chart PNG.
///
/// The dataset is loaded once; both outputs are derived from the same
/// record sequence. Any stage failure aborts the export, leaving whatever
/// was already written on disk.
pub fn export_snapshot(
    input: &Path,
    csv_path: &Path,
    plot_path: &Path,
    config: &PipelineConfig,
) -> Result<ExportReport> {
    let dataset = load_dataset(input)
        .with_context(|| format!("failed to load dataset {}", input.display()))?;

    write_summary_csv(csv_path, &dataset.data, &config.csv)
        .with_context(|| format!("failed to write CSV {}", csv_path.display()))?;
    info!("wrote {} CSV rows to {}", dataset.data.len(), csv_path.display());

    render_chart(plot_path, &dataset.data, &config.chart)
        .with_context(|| format!("failed to render chart {}", plot_path.display()))?;
    info!("rendered chart to {}", plot_path.display());

    Ok(ExportReport {
        records: dataset.data.len(),
    })
}
