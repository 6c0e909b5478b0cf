//! Chart rendering for snapshot data.
//!
//! This module renders a line chart of the illuminance, voltage, and sound
//! series against record index using the plotters library.

use std::path::Path;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use thiserror::Error;

use crate::config::ChartConfig;
use crate::core::records::Reading;

/// Errors that can occur during chart rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chart rendering error: {0}")]
    Backend(String),

    #[error("no readings to plot")]
    EmptySeries,
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// The plotted series: label, value extractor, line color.
const SERIES: [(&str, fn(&Reading) -> f64, RGBColor); 3] = [
    ("Illuminance", |r: &Reading| r.illuminance, RGBColor(228, 26, 28)),
    ("Voltage", |r: &Reading| r.voltage, RGBColor(55, 126, 184)),
    ("Sound", |r: &Reading| r.sound, RGBColor(77, 175, 74)),
];

/// Build one series as (index, value) points, x = 0-based record position.
fn series_points(readings: &[Reading], extract: fn(&Reading) -> f64) -> Vec<(f64, f64)> {
    readings
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, extract(r)))
        .collect()
}

/// Compute the y-axis bounds across all series.
fn value_bounds(series: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;

    for points in series {
        for (_, y) in points {
            if *y < y_min {
                y_min = *y;
            }
            if *y > y_max {
                y_max = *y;
            }
        }
    }

    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    (y_min, y_max)
}

/// Render the snapshot line chart and save it as a PNG raster.
///
/// Three series (illuminance, voltage, sound) are plotted against record
/// index with the legend at the top of a fixed-size canvas. Fails with
/// [`RenderError::EmptySeries`] before touching the output path when there
/// are no readings.
pub fn render_chart(output_path: &Path, readings: &[Reading], config: &ChartConfig) -> Result<()> {
    if readings.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    let series: Vec<Vec<(f64, f64)>> = SERIES
        .iter()
        .map(|(_, extract, _)| series_points(readings, *extract))
        .collect();

    let (y_min, y_max) = value_bounds(&series);
    let y_padding = (y_max - y_min) * 0.05;

    let x_max = if readings.len() > 1 {
        (readings.len() - 1) as f64
    } else {
        1.0
    };

    let root =
        BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();

    root.fill(&WHITE)
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, (y_min - y_padding)..(y_max + y_padding))
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    chart
        .configure_mesh()
        .draw()
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    for ((label, _, color), points) in SERIES.iter().zip(&series) {
        let color = *color;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(|e| RenderError::Backend(e.to_string()))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    root.present()
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    Ok(())
}
